use test_case::test_case;

use crate::{Error, ErrorKind};

#[test_case(Error::NonPositiveDimension { dim: "k", value: 0 }, ErrorKind::Configuration; "dimension")]
#[test_case(Error::InvalidTransposeFlag { operand: "trans_b", value: 3 }, ErrorKind::Configuration; "flag")]
#[test_case(Error::InvalidPeakGflops { value: -1.0 }, ErrorKind::Configuration; "peak")]
#[test_case(Error::InvalidVectorSize { value: 0 }, ErrorKind::Configuration; "vector")]
#[test_case(Error::UnknownModel { name: "x".into() }, ErrorKind::Configuration; "model")]
#[test_case(Error::Descriptor { source: tenmo_descriptor::Error::EmptyDescriptor }, ErrorKind::Configuration; "descriptor")]
#[test_case(Error::PartitionWidthMismatch { axis: "n", extent: 9, covered: 8 }, ErrorKind::InternalInvariant; "partition")]
#[test_case(Error::FlopsMismatch { expected: 10, actual: 8 }, ErrorKind::InternalInvariant; "flops")]
#[test_case(
    Error::NonPositiveThroughput { model: "a76", gflops: 0.0, m: 1, n: 1, k: 1 },
    ErrorKind::InternalInvariant;
    "throughput"
)]
fn test_error_kind(err: Error, kind: ErrorKind) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.is_configuration(), kind == ErrorKind::Configuration);
}

#[test]
fn test_display_names_the_problem() {
    let err = Error::PartitionWidthMismatch { axis: "n", extent: 9, covered: 8 };
    assert_eq!(err.to_string(), "blocking covers 8 of 9 along n");

    let err = Error::Descriptor { source: tenmo_descriptor::Error::EmptyDescriptor };
    assert!(err.to_string().starts_with("invalid contraction descriptor: "));
}
