//! Scenario tests for gesture handling and replay.
//!
//! These drive a tracker against an in-memory surface and check the resulting
//! view box, the way a host would observe it.

mod replay_tests;
