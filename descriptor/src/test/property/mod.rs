//! Property-based tests for descriptor analysis.

mod analyze_props;
