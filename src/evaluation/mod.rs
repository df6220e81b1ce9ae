//! Route cost evaluation.
//!
//! Turns a visiting order into a [`Solution`](crate::models::Solution) with
//! per-leg costs, and checks that orders are well-formed routes.

mod evaluator;

pub use evaluator::{check_order, evaluate, is_valid_order, order_duration};
