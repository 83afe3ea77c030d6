//! Expense flow: register people, group them, split a bill

use forge_systems::expense::{
    EqualSplit, Expense, ExpenseBook, ExpenseError, GroupDirectory, SplitStrategy, UserDirectory,
};
use pretty_assertions::assert_eq;

fn directories() -> (UserDirectory, GroupDirectory) {
    let mut users = UserDirectory::new();
    users.add_user(1, "Alice", "alice@example.com");
    users.add_user(2, "Bob", "bob@example.com");
    users.add_user(3, "Charlie", "charlie@example.com");

    let mut groups = GroupDirectory::new();
    groups.create_group(101, "Trip to Goa");
    for id in [1, 2, 3] {
        groups.add_member(101, id, &users).unwrap();
    }
    (users, groups)
}

#[test]
fn three_way_trip_settlement() {
    let (users, groups) = directories();
    let mut book = ExpenseBook::new();

    let expense = Expense::new(1001, 300.0, 1, vec![1, 2, 3], Box::new(EqualSplit)).unwrap();
    let report = book.add_expense(expense, &users).unwrap();

    assert_eq!(report.paid_by, "Alice");
    let names: Vec<&str> = report.owes.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    for line in &report.owes {
        assert!((line.amount - 100.0).abs() < f64::EPSILON);
    }

    assert_eq!(
        groups.roster(101, &users).unwrap().len(),
        report.owes.len()
    );
}

#[test]
fn shares_cover_the_full_amount() {
    let shares = EqualSplit.split(100.0, 3).unwrap();
    let total: f64 = shares.iter().sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn ghost_member_cannot_join_a_group() {
    let (users, mut groups) = directories();
    let err = groups.add_member(101, 42, &users).unwrap_err();
    assert_eq!(err, ExpenseError::UnknownUser(42));
}

#[test]
fn report_serializes_for_machine_output() {
    let (users, _groups) = directories();
    let mut book = ExpenseBook::new();

    let expense = Expense::new(1001, 300.0, 1, vec![1, 2, 3], Box::new(EqualSplit)).unwrap();
    let report = book.add_expense(expense, &users).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["paid_by"], "Alice");
    assert_eq!(json["owes"].as_array().unwrap().len(), 3);
}
