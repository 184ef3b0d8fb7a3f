/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first distances.
//!
//! [`Seq`] is the textbook queue-based visit; [`Par`] is a level-synchronous
//! visit whose frontier is split among the threads of a pool.

mod seq;
pub use seq::*;

mod par;
pub use par::*;
