//! Columns of the user-general table.

use std::cmp::Ordering;

use crate::models::{BlacklistFlag, Completion, Gender, ReviewStatus, UserRecord, UserType};
use crate::table::{BadgeStatus, CellValue, ColumnDef, ColumnFilter, EnumOption, FixedSide};

/// Number of activity periods offered by the activity filter.
pub const ACTIVITY_PERIODS: u32 = 20;

pub const ACTIVITY_PREFIX: &str = "Period";

pub const ACTIONS_KEY: &str = "option";

macro_rules! option {
    ($value:expr, $status:ident) => {
        EnumOption::new($value.code(), $value.label(), BadgeStatus::$status)
    };
}

pub const GENDER_OPTIONS: &[EnumOption] = &[
    option!(Gender::Unset, Default),
    option!(Gender::Male, Default),
    option!(Gender::Female, Default),
];

pub const USER_TYPE_OPTIONS: &[EnumOption] = &[
    option!(UserType::Student, Success),
    option!(UserType::Alumni, Error),
];

pub const REVIEW_STATUS_OPTIONS: &[EnumOption] = &[
    option!(ReviewStatus::Unverified, Error),
    option!(ReviewStatus::Pending, Processing),
    option!(ReviewStatus::Rejected, Warning),
    option!(ReviewStatus::Approved, Success),
];

pub const COMPLETION_OPTIONS: &[EnumOption] = &[
    option!(Completion::Incomplete, Error),
    option!(Completion::Complete, Success),
];

pub const BLACKLIST_OPTIONS: &[EnumOption] = &[
    option!(BlacklistFlag::Clear, Success),
    option!(BlacklistFlag::Listed, Error),
];

fn nickname(user: &UserRecord) -> CellValue<'_> {
    CellValue::Text(&user.nickname)
}

fn realname(user: &UserRecord) -> CellValue<'_> {
    CellValue::Text(&user.realname)
}

fn student_number(user: &UserRecord) -> CellValue<'_> {
    CellValue::Text(&user.student_number)
}

fn phone_number(user: &UserRecord) -> CellValue<'_> {
    CellValue::Text(&user.phone_number)
}

fn gender(user: &UserRecord) -> CellValue<'_> {
    CellValue::Code(user.gender.code())
}

fn user_type(user: &UserRecord) -> CellValue<'_> {
    CellValue::Code(user.user_type.code())
}

fn identified(user: &UserRecord) -> CellValue<'_> {
    CellValue::Code(user.identified.code())
}

fn material(user: &UserRecord) -> CellValue<'_> {
    CellValue::Image(user.material.as_deref())
}

fn is_complete(user: &UserRecord) -> CellValue<'_> {
    CellValue::Code(user.is_complete.code())
}

fn activity_list(user: &UserRecord) -> CellValue<'_> {
    CellValue::Tags(user.activity_list.as_deref())
}

fn is_black(user: &UserRecord) -> CellValue<'_> {
    CellValue::Code(user.is_black.code())
}

fn by_student_number(a: &UserRecord, b: &UserRecord) -> Ordering {
    a.student_number.cmp(&b.student_number)
}

fn joined_period(user: &UserRecord, period: i64) -> bool {
    u32::try_from(period).is_ok_and(|period| user.joined_activity(period))
}

/// Column definitions in display order.
pub fn user_columns() -> Vec<ColumnDef<UserRecord>> {
    vec![
        ColumnDef::text("Nickname", "nickname", nickname).fixed(FixedSide::Left),
        ColumnDef::text("Real name", "realname", realname).fixed(FixedSide::Left),
        ColumnDef::text("Student No.", "studentNumber", student_number).sorter(by_student_number),
        ColumnDef::enumeration("Gender", "gender", GENDER_OPTIONS, gender),
        ColumnDef::text("Phone", "phoneNumber", phone_number),
        ColumnDef::enumeration("User type", "userType", USER_TYPE_OPTIONS, user_type),
        ColumnDef::enumeration(
            "Review status",
            "identified",
            REVIEW_STATUS_OPTIONS,
            identified,
        ),
        ColumnDef::image("Material", "material", material)
            .width(150.0)
            .hide_in_search(),
        ColumnDef::enumeration("Profile", "isComplete", COMPLETION_OPTIONS, is_complete),
        ColumnDef::tags("Activities", "activityList", ACTIVITY_PREFIX, activity_list)
            .width(300.0)
            .hide_in_search()
            .filter(ColumnFilter::numbered(
                ACTIVITY_PREFIX,
                ACTIVITY_PERIODS,
                joined_period,
            )),
        ColumnDef::enumeration("Blacklisted", "isBlack", BLACKLIST_OPTIONS, is_black),
        ColumnDef::actions("Actions", ACTIONS_KEY).width(200.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ColumnKind, TableState};

    fn user(id: u64, student_number: &str, activities: Option<Vec<u32>>) -> UserRecord {
        UserRecord {
            id,
            nickname: format!("nick{id}"),
            realname: format!("name{id}"),
            student_number: student_number.to_owned(),
            gender: Gender::Male,
            phone_number: String::new(),
            user_type: UserType::Student,
            identified: ReviewStatus::Approved,
            material: None,
            is_complete: Completion::Complete,
            activity_list: activities,
            is_black: BlacklistFlag::Clear,
        }
    }

    fn column<'a>(columns: &'a [ColumnDef<UserRecord>], key: &str) -> &'a ColumnDef<UserRecord> {
        columns.iter().find(|c| c.key == key).unwrap()
    }

    #[test]
    fn layout_matches_the_page() {
        let columns = user_columns();
        let titles: Vec<_> = columns.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "Nickname",
                "Real name",
                "Student No.",
                "Gender",
                "Phone",
                "User type",
                "Review status",
                "Material",
                "Profile",
                "Activities",
                "Blacklisted",
                "Actions",
            ]
        );

        assert_eq!(column(&columns, "nickname").fixed, Some(FixedSide::Left));
        assert_eq!(column(&columns, "realname").fixed, Some(FixedSide::Left));
        assert!(column(&columns, "studentNumber").is_sortable());
        assert_eq!(column(&columns, "material").width, Some(150.0));
        assert_eq!(column(&columns, "activityList").width, Some(300.0));
        assert_eq!(column(&columns, ACTIONS_KEY).width, Some(200.0));
        assert_eq!(column(&columns, ACTIONS_KEY).kind, ColumnKind::Actions);

        let hidden: Vec<_> = columns
            .iter()
            .filter(|c| c.hide_in_search)
            .map(|c| c.key)
            .collect();
        assert_eq!(hidden, vec!["material", "activityList", ACTIONS_KEY]);
    }

    #[test]
    fn enum_filters_are_multi_select() {
        let columns = user_columns();
        for key in ["gender", "userType", "identified", "isComplete", "isBlack"] {
            let filter = column(&columns, key).filter.as_ref().unwrap();
            assert!(filter.multiple, "{key}");
        }
        let activities = column(&columns, "activityList").filter.as_ref().unwrap();
        assert!(!activities.multiple);
        assert_eq!(activities.options.len(), 20);
        assert_eq!(activities.options[4].label, "Period 5");
    }

    #[test]
    fn badge_statuses_follow_the_codes() {
        let find = |options: &[EnumOption], code| EnumOption::find(options, code).unwrap().status;
        assert_eq!(find(USER_TYPE_OPTIONS, 2), BadgeStatus::Error);
        assert_eq!(find(REVIEW_STATUS_OPTIONS, 1), BadgeStatus::Processing);
        assert_eq!(find(REVIEW_STATUS_OPTIONS, 2), BadgeStatus::Warning);
        assert_eq!(find(BLACKLIST_OPTIONS, 1), BadgeStatus::Error);
        assert_eq!(EnumOption::find(BLACKLIST_OPTIONS, 0).unwrap().label, "No");
    }

    #[test]
    fn activity_filter_matches_members_only() {
        let rows = vec![
            user(1, "1", Some(vec![5, 2])),
            user(2, "2", Some(vec![3])),
            user(3, "3", None),
        ];
        let columns = user_columns();
        let mut state = TableState::new();
        state.toggle_filter(column(&columns, "activityList"), 5);

        let visible: Vec<u64> = state.apply(&columns, &rows).iter().map(|u| u.id).collect();
        assert_eq!(visible, vec![1]);
    }

    #[test]
    fn student_numbers_sort_ascending() {
        let rows = vec![
            user(1, "20210001", None),
            user(2, "20190099", None),
            user(3, "20200050", None),
        ];
        let columns = user_columns();
        let mut state = TableState::new();
        state.toggle_sort("studentNumber");

        let sorted: Vec<&str> = state
            .apply(&columns, &rows)
            .iter()
            .map(|u| u.student_number.as_str())
            .collect();
        assert_eq!(sorted, vec!["20190099", "20200050", "20210001"]);
    }

    #[test]
    fn activities_render_in_ascending_order() {
        let columns = user_columns();
        let text = column(&columns, "activityList").display_text(&user(1, "1", Some(vec![7, 2])));
        assert_eq!(text, "Period 2, Period 7");
    }
}
