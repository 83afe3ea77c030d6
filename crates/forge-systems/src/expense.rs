//! Expense splitting: users, groups, and pluggable split strategies
//!
//! Lookups are typed errors rather than null handles, and the equal split
//! refuses an empty participant list instead of dividing by zero.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// User identifier
pub type UserId = u32;

/// Group identifier
pub type GroupId = u32;

/// Errors raised by the expense subsystem
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseError {
    /// No user registered under the id
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// No group registered under the id
    #[error("unknown group: {0}")]
    UnknownGroup(GroupId),

    /// An expense needs at least one participant
    #[error("expense has no participants")]
    NoParticipants,

    /// Amounts must be positive
    #[error("expense amount must be positive, got {0}")]
    NonPositiveAmount(f64),
}

/// A registered person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// User id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// A named set of users sharing expenses
#[derive(Debug, Clone)]
pub struct Group {
    /// Group id
    pub id: GroupId,
    /// Display name
    pub name: String,
    members: Vec<UserId>,
}

impl Group {
    /// Empty group
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Member ids in join order
    #[inline]
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
    }
}

/// Decides how an amount is shared among participants
pub trait SplitStrategy: Send + Sync {
    /// One share per participant, in participant order
    ///
    /// # Errors
    /// [`ExpenseError::NoParticipants`] when `participants` is zero.
    fn split(&self, amount: f64, participants: usize) -> Result<Vec<f64>, ExpenseError>;
}

/// Everyone owes the same share
#[derive(Debug, Default)]
pub struct EqualSplit;

impl SplitStrategy for EqualSplit {
    fn split(&self, amount: f64, participants: usize) -> Result<Vec<f64>, ExpenseError> {
        if participants == 0 {
            return Err(ExpenseError::NoParticipants);
        }
        let share = amount / participants as f64;
        Ok(vec![share; participants])
    }
}

/// Id-keyed store of users
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    /// Empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user; re-registering an id replaces the earlier entry
    pub fn add_user(&mut self, id: UserId, name: impl Into<String>, email: impl Into<String>) {
        self.users.insert(
            id,
            User {
                id,
                name: name.into(),
                email: email.into(),
            },
        );
    }

    /// Look up a user
    ///
    /// # Errors
    /// [`ExpenseError::UnknownUser`] when the id is not registered.
    pub fn get(&self, id: UserId) -> Result<&User, ExpenseError> {
        self.users.get(&id).ok_or(ExpenseError::UnknownUser(id))
    }

    /// Number of registered users
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the directory is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Id-keyed store of groups
#[derive(Debug, Default)]
pub struct GroupDirectory {
    groups: HashMap<GroupId, Group>,
}

impl GroupDirectory {
    /// Empty directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group; re-creating an id replaces the earlier group
    pub fn create_group(&mut self, id: GroupId, name: impl Into<String>) {
        self.groups.insert(id, Group::new(id, name));
    }

    /// Add a registered user to a group
    ///
    /// # Errors
    /// [`ExpenseError::UnknownGroup`] / [`ExpenseError::UnknownUser`] when
    /// either id is not registered.
    pub fn add_member(
        &mut self,
        group_id: GroupId,
        user_id: UserId,
        users: &UserDirectory,
    ) -> Result<(), ExpenseError> {
        users.get(user_id)?;
        let group = self
            .groups
            .get_mut(&group_id)
            .ok_or(ExpenseError::UnknownGroup(group_id))?;
        group.members.push(user_id);
        Ok(())
    }

    /// Look up a group
    ///
    /// # Errors
    /// [`ExpenseError::UnknownGroup`] when the id is not registered.
    pub fn get(&self, id: GroupId) -> Result<&Group, ExpenseError> {
        self.groups.get(&id).ok_or(ExpenseError::UnknownGroup(id))
    }

    /// Member lines for a group, one per member in join order
    ///
    /// # Errors
    /// [`ExpenseError::UnknownGroup`] / [`ExpenseError::UnknownUser`] on a
    /// missing group or a member no longer registered.
    pub fn roster(
        &self,
        id: GroupId,
        users: &UserDirectory,
    ) -> Result<Vec<String>, ExpenseError> {
        let group = self.get(id)?;
        group
            .members
            .iter()
            .map(|&uid| {
                let user = users.get(uid)?;
                Ok(format!("- {} ({})", user.name, user.email))
            })
            .collect()
    }
}

/// One share of a settled expense
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareLine {
    /// Who owes
    pub user_id: UserId,
    /// Their display name
    pub name: String,
    /// How much they owe
    pub amount: f64,
}

/// The settlement produced when an expense is recorded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    /// Expense this report settles
    pub expense_id: u32,
    /// Total amount paid
    pub amount: f64,
    /// Name of whoever paid
    pub paid_by: String,
    /// Shares in ascending user-id order
    pub owes: Vec<ShareLine>,
}

/// A recorded payment to be shared
pub struct Expense {
    /// Expense id
    pub id: u32,
    /// Total amount paid
    pub amount: f64,
    /// Who fronted the money
    pub paid_by: UserId,
    /// Everyone sharing the cost
    pub participants: Vec<UserId>,
    strategy: Box<dyn SplitStrategy>,
}

impl Expense {
    /// New expense using `strategy` to divide `amount`
    ///
    /// # Errors
    /// [`ExpenseError::NonPositiveAmount`] for a zero or negative amount.
    pub fn new(
        id: u32,
        amount: f64,
        paid_by: UserId,
        participants: Vec<UserId>,
        strategy: Box<dyn SplitStrategy>,
    ) -> Result<Self, ExpenseError> {
        if amount <= 0.0 {
            return Err(ExpenseError::NonPositiveAmount(amount));
        }
        Ok(Self {
            id,
            amount,
            paid_by,
            participants,
            strategy,
        })
    }

    /// Each participant's share, keyed by user id
    ///
    /// # Errors
    /// Propagates the strategy's error for an empty participant list.
    pub fn shares(&self) -> Result<BTreeMap<UserId, f64>, ExpenseError> {
        let amounts = self.strategy.split(self.amount, self.participants.len())?;
        Ok(self
            .participants
            .iter()
            .copied()
            .zip(amounts)
            .collect())
    }
}

/// Ledger of recorded expenses
#[derive(Default)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    /// Empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense and produce its settlement report
    ///
    /// Payer and every participant must be registered.
    ///
    /// # Errors
    /// [`ExpenseError::UnknownUser`] for an unregistered id, or the
    /// strategy's error for an empty participant list.
    pub fn add_expense(
        &mut self,
        expense: Expense,
        users: &UserDirectory,
    ) -> Result<SplitReport, ExpenseError> {
        let payer = users.get(expense.paid_by)?;
        for &uid in &expense.participants {
            users.get(uid)?;
        }

        let shares = expense.shares()?;
        let owes = shares
            .iter()
            .map(|(&uid, &amount)| {
                let user = users.get(uid)?;
                Ok(ShareLine {
                    user_id: uid,
                    name: user.name.clone(),
                    amount,
                })
            })
            .collect::<Result<Vec<_>, ExpenseError>>()?;

        let report = SplitReport {
            expense_id: expense.id,
            amount: expense.amount,
            paid_by: payer.name.clone(),
            owes,
        };

        tracing::info!(
            expense = expense.id,
            amount = expense.amount,
            paid_by = %report.paid_by,
            participants = expense.participants.len(),
            "expense recorded"
        );
        self.expenses.push(expense);

        Ok(report)
    }

    /// Number of recorded expenses
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the book is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
