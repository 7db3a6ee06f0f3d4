/*

    Errors surfaced by slice range computations.

    Loading scene files keeps returning Box<dyn Error> (see json_parser.rs),
    this enum only covers precondition violations of the geometry itself.

    @date: Oct, 2025
    @author: bartu
*/

use thiserror::Error;

use crate::numeric::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SliceRangeError {
    /// A zero-length direction cannot be rotated onto an axis
    #[error("cannot align zero-length direction {0} with an axis")]
    InvalidDirection(Vector3),
}
