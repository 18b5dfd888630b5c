//! Database integration tests.

use super::*;
use crate::error::AppError;
use crate::store::{SnippetStore, UserStore};
use crate::test_support::{setup_temp_db, setup_temp_db_with_clock, MutableClock};
use chrono::TimeDelta;
use std::sync::{Arc, Barrier};
use std::thread;
