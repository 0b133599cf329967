// File: crates/dash-client/src/queries.rs
// Summary: GraphQL documents for each dashboard card.

/// Greeting name.
pub const PROFILE: &str = r#"{
  user {
    firstName
    lastName
  }
}"#;

/// Highest level reached in the module named by `$name`.
pub const LEVEL: &str = r#"query Level($name: String!) {
  transaction(
    where: {
      _and: [
        { type: { _eq: "level" } },
        { event: { object: { name: { _eq: $name } } } }
      ]
    },
    order_by: { amount: desc },
    limit: 1
  ) {
    amount
  }
}"#;

/// Every XP transaction, newest first.
pub const TRANSACTIONS: &str = r#"{
  user {
    transactions(
      where: { type: { _eq: "xp" } },
      order_by: { createdAt: desc }
    ) {
      object {
        name
      }
      amount
      createdAt
    }
  }
}"#;

/// Skill transactions; everything except xp, level and audit up/down.
pub const SKILLS: &str = r#"{
  user {
    transactions(
      where: { type: { _nin: ["xp", "level", "up", "down"] } }
    ) {
      type
      amount
    }
  }
}"#;

/// Event window of the module named by `$name` and its XP transactions, oldest first.
pub const PROGRESS: &str = r#"query Progress($name: String!) {
  event(where: { object: { name: { _eq: $name } } }) {
    object {
      events {
        startAt
        endAt
      }
    }
  }
  transaction(
    where: {
      _and: [
        { type: { _eq: "xp" } },
        { event: { object: { name: { _eq: $name } } } }
      ]
    },
    order_by: { createdAt: asc }
  ) {
    amount
    object {
      name
    }
    createdAt
  }
}"#;

/// Audit ratio plus succeeded and failed audit counts.
pub const AUDITS: &str = r#"{
  user {
    auditRatio
    audits_aggregate(where: { closureType: { _eq: succeeded } }) {
      aggregate {
        count
      }
    }
    failed_audits: audits_aggregate(where: { closureType: { _eq: failed } }) {
      aggregate {
        count
      }
    }
  }
}"#;
