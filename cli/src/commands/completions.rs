//! Shell completions generation command.

use std::io::Write;

use clap::CommandFactory as _;
use clap_complete::{Generator, Shell};

use crate::cli::Cli;

pub fn generate_completions(shell: Shell) {
    print_completions(shell, &mut std::io::stdout());
}

fn print_completions<G: Generator>(generator: G, buf: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_owned();
    clap_complete::generate(generator, &mut cmd, bin_name, buf);
    buf.flush().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_completions_cover_subcommands() {
        let mut buf = Vec::new();
        print_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("roster"));
        assert!(script.contains("registrations"));
        assert!(script.contains("blacklist"));
    }
}
