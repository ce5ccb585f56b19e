//! Dynamic-programming emitters: a one-dimensional sequence table and a
//! two-dimensional capacity table, both finished by a backtrack phase that
//! follows the recorded decisions back to a concrete answer.

mod knapsack;
mod lis;

pub use knapsack::Knapsack;
pub use lis::LongestIncreasingSubsequence;
