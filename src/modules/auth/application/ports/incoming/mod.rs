pub mod credential_policy;
pub mod use_cases;
