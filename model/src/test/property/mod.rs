//! Property-based tests for interpolation, blocking and dispatch.

mod blocking_props;
mod model_props;
