//! Runs API calls off the UI thread.
//!
//! Calls are spawned on a tokio runtime and their outcomes come back over a
//! `flume` channel the page drains once per frame. Each task asks egui for a
//! repaint when it finishes so the result shows up without user input.

use std::sync::Arc;

use flume::{Receiver, Sender};
use roster_business::models::{PageResult, UserRecord};
use roster_business::table::LoadTicket;
use roster_business::user_general::PendingLoad;
use roster_business::{ApiResult, Mutation, UsersApi};
use tokio::runtime::Handle;

/// Outcome of a finished task.
#[derive(Debug)]
pub enum TaskEvent {
    Loaded {
        ticket: LoadTicket,
        result: ApiResult<PageResult<UserRecord>>,
    },
    Mutated {
        mutation: Mutation,
        result: ApiResult<()>,
    },
}

pub struct TaskRunner {
    api: Arc<dyn UsersApi>,
    runtime: Handle,
    send: Sender<TaskEvent>,
    recv: Receiver<TaskEvent>,
}

impl std::fmt::Debug for TaskRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRunner")
            .field("pending", &self.recv.len())
            .finish_non_exhaustive()
    }
}

impl TaskRunner {
    pub fn new(api: Arc<dyn UsersApi>, runtime: Handle) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            api,
            runtime,
            send,
            recv,
        }
    }

    pub fn spawn_load(&self, load: PendingLoad, ctx: egui::Context) {
        let api = Arc::clone(&self.api);
        let send = self.send.clone();
        self.runtime.spawn(async move {
            let result = load.fetch(api.as_ref()).await;
            if send
                .send(TaskEvent::Loaded {
                    ticket: load.ticket,
                    result,
                })
                .is_err()
            {
                log::debug!("Page closed before load #{} finished", load.ticket.seq);
            }
            ctx.request_repaint();
        });
    }

    pub fn spawn_mutation(&self, mutation: Mutation, ctx: egui::Context) {
        let api = Arc::clone(&self.api);
        let send = self.send.clone();
        self.runtime.spawn(async move {
            let result = mutation.execute(api.as_ref()).await;
            if send.send(TaskEvent::Mutated { mutation, result }).is_err() {
                log::debug!("Page closed before {mutation:?} finished");
            }
            ctx.request_repaint();
        });
    }

    /// Finished tasks, without blocking.
    pub fn drain(&self) -> Vec<TaskEvent> {
        self.recv.try_iter().collect()
    }
}
