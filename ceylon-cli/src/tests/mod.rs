//! Shared test harness modules for the Ceylon CLI.

use super::*;

mod helpers;
