/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

mod closure_vec;
pub use closure_vec::closure_vec;

mod threadpool;
pub use threadpool::*;
