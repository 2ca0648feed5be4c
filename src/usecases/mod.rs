//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces. This tool has a
//! single workflow:
//! - `DeploymentInvoker`: parse the router list, issue one deployment

pub mod invoker;
