//! Single-core FP32 microkernel throughput grid for ARM Cortex-A76.

/// Tabulated microkernel M extents.
pub(super) static M_VALUES: [i64; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
/// Tabulated microkernel N extents.
pub(super) static N_VALUES: [i64; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
/// Tabulated K extents.
pub(super) static K_VALUES: [i64; 7] = [1, 4, 16, 24, 32, 64, 128];

/// Flattened `[m][n][k][trans_a][trans_b]` GFLOPS grid.
#[rustfmt::skip]
pub(super) static GFLOPS: [f64; 6720] = [
    0.45, 0.42, 0.37, 0.35, 1.10, 1.04, 0.92, 0.86, 1.88, 1.82,
    1.62, 1.57, 2.11, 2.05, 1.82, 1.73, 2.25, 2.14, 1.89, 1.77,
    2.44, 2.31, 2.04, 1.91, 2.54, 2.40, 2.12, 1.99, 0.49, 0.46,
    0.41, 0.39, 1.21, 1.14, 1.01, 0.96, 2.10, 2.05, 1.81, 1.76,
    2.36, 2.29, 2.02, 1.91, 2.49, 2.35, 2.08, 1.95, 2.69, 2.54,
    2.25, 2.11, 2.80, 2.64, 2.33, 2.20, 0.54, 0.51, 0.45, 0.42,
    1.32, 1.25, 1.11, 1.06, 2.32, 2.27, 2.01, 1.94, 2.62, 2.50,
    2.22, 2.08, 2.72, 2.56, 2.27, 2.14, 2.93, 2.77, 2.45, 2.32,
    3.05, 2.88, 2.55, 2.42, 0.58, 0.55, 0.49, 0.47, 1.43, 1.37,
    1.21, 1.17, 2.56, 2.50, 2.21, 2.11, 2.86, 2.71, 2.40, 2.24,
    2.93, 2.77, 2.46, 2.35, 3.17, 3.00, 2.66, 2.54, 3.29, 3.13,
    2.77, 2.66, 0.62, 0.59, 0.53, 0.51, 1.54, 1.49, 1.32, 1.28,
    2.80, 2.71, 2.40, 2.26, 3.08, 2.91, 2.57, 2.41, 3.15, 3.00,
    2.66, 2.56, 3.40, 3.25, 2.88, 2.78, 3.54, 3.40, 3.01, 2.91,
    0.67, 0.64, 0.57, 0.55, 1.66, 1.62, 1.43, 1.39, 3.04, 2.91,
    2.58, 2.41, 3.29, 3.10, 2.74, 2.59, 3.37, 3.25, 2.87, 2.79,
    3.65, 3.52, 3.12, 3.03, 3.80, 3.69, 3.26, 3.17, 0.72, 0.70,
    0.62, 0.60, 1.79, 1.75, 1.55, 1.50, 3.26, 3.09, 2.74, 2.56,
    3.49, 3.30, 2.92, 2.79, 3.61, 3.51, 3.11, 3.02, 3.91, 3.81,
    3.37, 3.27, 4.09, 3.99, 3.53, 3.42, 0.77, 0.75, 0.66, 0.64,
    1.93, 1.89, 1.67, 1.60, 3.46, 3.26, 2.89, 2.71, 3.69, 3.51,
    3.11, 3.00, 3.87, 3.78, 3.35, 3.24, 4.19, 4.10, 3.63, 3.51,
    4.39, 4.30, 3.81, 3.66, 0.82, 0.80, 0.71, 0.68, 2.07, 2.01,
    1.78, 1.69, 3.65, 3.43, 3.04, 2.87, 3.89, 3.75, 3.32, 3.22,
    4.15, 4.05, 3.59, 3.44, 4.50, 4.40, 3.89, 3.73, 4.72, 4.60,
    4.07, 3.88, 0.88, 0.86, 0.76, 0.72, 2.21, 2.13, 1.89, 1.77,
    3.82, 3.61, 3.20, 3.05, 4.12, 4.00, 3.55, 3.44, 4.44, 4.32,
    3.82, 3.63, 4.81, 4.68, 4.14, 3.93, 5.04, 4.88, 4.32, 4.08,
    0.94, 0.90, 0.80, 0.75, 2.34, 2.23, 1.98, 1.85, 3.99, 3.81,
    3.37, 3.25, 4.37, 4.27, 3.78, 3.66, 4.72, 4.56, 4.04, 3.80,
    5.12, 4.94, 4.37, 4.11, 5.36, 5.14, 4.55, 4.27, 0.99, 0.95,
    0.84, 0.78, 2.46, 2.33, 2.06, 1.93, 4.18, 4.02, 3.56, 3.46,
    4.64, 4.54, 4.02, 3.86, 5.00, 4.78, 4.23, 3.96, 5.42, 5.17,
    4.58, 4.28, 5.65, 5.37, 4.76, 4.45, 1.04, 0.98, 0.87, 0.82,
    2.57, 2.42, 2.14, 2.02, 4.38, 4.26, 3.77, 3.67, 4.92, 4.79,
    4.25, 4.03, 5.25, 4.98, 4.41, 4.12, 5.68, 5.38, 4.76, 4.45,
    5.91, 5.58, 4.94, 4.63, 1.08, 1.02, 0.90, 0.85, 2.67, 2.51,
    2.23, 2.11, 4.62, 4.51, 3.99, 3.86, 5.21, 5.03, 4.45, 4.19,
    5.47, 5.16, 4.57, 4.29, 5.92, 5.57, 4.93, 4.64, 6.15, 5.79,
    5.13, 4.84, 1.12, 1.06, 0.94, 0.89, 2.76, 2.62, 2.32, 2.22,
    4.87, 4.76, 4.22, 4.05, 5.47, 5.23, 4.63, 4.34, 5.67, 5.34,
    4.73, 4.48, 6.13, 5.78, 5.11, 4.85, 6.36, 6.01, 5.32, 5.07,
    0.88, 0.83, 0.73, 0.69, 2.16, 2.05, 1.81, 1.74, 3.81, 3.72,
    3.30, 3.17, 4.28, 4.10, 3.63, 3.40, 4.44, 4.18, 3.70, 3.51,
    4.80, 4.52, 4.00, 3.80, 4.98, 4.70, 4.17, 3.97, 0.97, 0.92,
    0.81, 0.78, 2.38, 2.28, 2.02, 1.95, 4.27, 4.16, 3.69, 3.51,
    4.76, 4.51, 4.00, 3.74, 4.88, 4.62, 4.09, 3.91, 5.27, 5.00,
    4.43, 4.24, 5.48, 5.21, 4.62, 4.44, 1.05, 1.01, 0.89, 0.86,
    2.61, 2.52, 2.23, 2.17, 4.75, 4.59, 4.06, 3.83, 5.21, 4.91,
    4.35, 4.08, 5.32, 5.08, 4.50, 4.34, 5.75, 5.50, 4.87, 4.71,
    5.99, 5.75, 5.09, 4.94, 1.14, 1.10, 0.98, 0.95, 2.85, 2.78,
    2.46, 2.39, 5.21, 4.98, 4.41, 4.13, 5.64, 5.31, 4.70, 4.45,
    5.77, 5.57, 4.93, 4.78, 6.25, 6.04, 5.35, 5.19, 6.52, 6.32,
    5.60, 5.44, 1.24, 1.21, 1.07, 1.04, 3.11, 3.04, 2.69, 2.60,
    5.65, 5.35, 4.74, 4.43, 6.04, 5.72, 5.06, 4.84, 6.25, 6.08,
    5.39, 5.23, 6.78, 6.60, 5.85, 5.67, 7.09, 6.92, 6.13, 5.94,
    1.34, 1.31, 1.16, 1.12, 3.38, 3.30, 2.92, 2.79, 6.05, 5.71,
    5.05, 4.74, 6.45, 6.15, 5.45, 5.25, 6.77, 6.62, 5.86, 5.67,
    7.34, 7.19, 6.36, 6.14, 7.69, 7.53, 6.67, 6.41, 1.45, 1.42,
    1.26, 1.20, 3.66, 3.55, 3.14, 2.98, 6.43, 6.06, 5.36, 5.07,
    6.87, 6.62, 5.86, 5.69, 7.32, 7.16, 6.34, 6.08, 7.95, 7.76,
    6.87, 6.58, 8.33, 8.12, 7.19, 6.85, 1.57, 1.52, 1.35, 1.28,
    3.93, 3.78, 3.35, 3.15, 6.79, 6.42, 5.68, 5.43, 7.33, 7.13,
    6.31, 6.13, 7.89, 7.68, 6.80, 6.45, 8.56, 8.32, 7.37, 6.98,
    8.97, 8.68, 7.69, 7.25, 1.68, 1.62, 1.43, 1.35, 4.19, 4.00,
    3.54, 3.31, 7.14, 6.81, 6.03, 5.82, 7.82, 7.65, 6.77, 6.55,
    8.46, 8.16, 7.23, 6.80, 9.17, 8.83, 7.82, 7.35, 9.59, 9.20,
    8.14, 7.63, 1.78, 1.70, 1.51, 1.41, 4.43, 4.19, 3.71, 3.47,
    7.52, 7.25, 6.42, 6.23, 8.36, 8.18, 7.24, 6.94, 9.00, 8.60,
    7.61, 7.13, 9.75, 9.30, 8.23, 7.70, 10.17, 9.66, 8.55, 8.00,
    1.88, 1.78, 1.58, 1.47, 4.65, 4.38, 3.88, 3.65, 7.94, 7.72,
    6.83, 6.64, 8.92, 8.68, 7.68, 7.30, 9.50, 9.00, 7.97, 7.45,
    10.28, 9.72, 8.61, 8.05, 10.70, 10.09, 8.94, 8.38, 1.97, 1.85,
    1.64, 1.54, 4.84, 4.57, 4.05, 3.85, 8.40, 8.21, 7.27, 7.03,
    9.47, 9.14, 8.09, 7.61, 9.94, 9.37, 8.30, 7.80, 10.75, 10.12,
    8.96, 8.44, 11.17, 10.52, 9.31, 8.80, 2.05, 1.93, 1.71, 1.62,
    5.03, 4.78, 4.23, 4.06, 8.90, 8.70, 7.70, 7.39, 9.99, 9.55,
    8.46, 7.91, 10.35, 9.75, 8.63, 8.18, 11.18, 10.54, 9.33, 8.86,
    11.61, 10.97, 9.71, 9.27, 2.12, 2.01, 1.78, 1.71, 5.23, 5.02,
    4.44, 4.30, 9.42, 9.17, 8.12, 7.71, 10.47, 9.92, 8.78, 8.21,
    10.73, 10.16, 9.00, 8.61, 11.59, 11.00, 9.74, 9.34, 12.04, 11.47,
    10.16, 9.78, 2.20, 2.11, 1.87, 1.80, 5.45, 5.28, 4.67, 4.54,
    9.94, 9.59, 8.49, 7.99, 10.89, 10.26, 9.08, 8.53, 11.11, 10.62,
    9.41, 9.09, 12.02, 11.51, 10.19, 9.86, 12.51, 12.04, 10.66, 10.34,
    1.29, 1.24, 1.09, 1.06, 3.20, 3.10, 2.74, 2.66, 5.83, 5.63,
    4.98, 4.69, 6.39, 6.03, 5.34, 5.01, 6.53, 6.23, 5.52, 5.33,
    7.06, 6.75, 5.98, 5.78, 7.34, 7.06, 6.25, 6.06, 1.43, 1.38,
    1.22, 1.19, 3.56, 3.47, 3.08, 2.98, 6.51, 6.23, 5.51, 5.16,
    7.04, 6.63, 5.87, 5.56, 7.22, 6.96, 6.16, 5.98, 7.81, 7.55,
    6.69, 6.49, 8.15, 7.91, 7.00, 6.80, 1.57, 1.53, 1.36, 1.32,
    3.95, 3.86, 3.42, 3.30, 7.17, 6.79, 6.01, 5.62, 7.66, 7.25,
    6.42, 6.14, 7.94, 7.73, 6.84, 6.64, 8.60, 8.39, 7.43, 7.20,
    9.00, 8.79, 7.78, 7.54, 1.73, 1.69, 1.50, 1.45, 4.35, 4.25,
    3.76, 3.59, 7.78, 7.33, 6.49, 6.10, 8.28, 7.91, 7.00, 6.76,
    8.71, 8.52, 7.54, 7.29, 9.45, 9.24, 8.19, 7.90, 9.90, 9.69,
    8.58, 8.24, 1.89, 1.85, 1.64, 1.57, 4.76, 4.62, 4.09, 3.87,
    8.35, 7.87, 6.97, 6.60, 8.93, 8.61, 7.63, 7.40, 9.52, 9.31,
    8.25, 7.90, 10.34, 10.10, 8.94, 8.55, 10.84, 10.56, 9.35, 8.90,
    2.06, 2.00, 1.77, 1.68, 5.16, 4.97, 4.40, 4.13, 8.90, 8.42,
    7.46, 7.13, 9.62, 9.36, 8.29, 8.05, 10.37, 10.08, 8.93, 8.47,
    11.25, 10.92, 9.67, 9.15, 11.78, 11.39, 10.09, 9.51, 2.22, 2.14,
    1.89, 1.78, 5.55, 5.28, 4.68, 4.38, 9.45, 9.02, 7.99, 7.71,
    10.36, 10.13, 8.97, 8.67, 11.20, 10.80, 9.56, 8.99, 12.15, 11.69,
    10.35, 9.72, 12.70, 12.16, 10.77, 10.09, 2.38, 2.27, 2.01, 1.88,
    5.91, 5.58, 4.94, 4.63, 10.03, 9.67, 8.56, 8.31, 11.15, 10.91,
    9.66, 9.25, 12.00, 11.46, 10.15, 9.49, 13.00, 12.39, 10.97, 10.26,
    13.56, 12.87, 11.40, 10.65, 2.52, 2.39, 2.11, 1.98, 6.23, 5.87,
    5.20, 4.90, 10.65, 10.37, 9.18, 8.91, 11.98, 11.65, 10.31, 9.79,
    12.75, 12.07, 10.68, 9.99, 13.79, 13.03, 11.54, 10.80, 14.35, 13.54,
    11.99, 11.24, 2.66, 2.50, 2.22, 2.08, 6.53, 6.17, 5.46, 5.19,
    11.34, 11.09, 9.82, 9.49, 12.79, 12.34, 10.92, 10.27, 13.42, 12.64,
    11.19, 10.52, 14.50, 13.66, 12.09, 11.39, 15.07, 14.19, 12.57, 11.88,
    2.78, 2.62, 2.32, 2.20, 6.83, 6.49, 5.74, 5.52, 12.08, 11.82,
    10.46, 10.03, 13.57, 12.95, 11.47, 10.73, 14.03, 13.23, 11.71, 11.11,
    15.16, 14.30, 12.66, 12.03, 15.74, 14.88, 13.18, 12.58, 2.89, 2.74,
    2.43, 2.33, 7.13, 6.84, 6.06, 5.87, 12.85, 12.50, 11.07, 10.51,
    14.27, 13.51, 11.96, 11.19, 14.62, 13.85, 12.27, 11.75, 15.79, 14.99,
    13.28, 12.75, 16.41, 15.64, 13.85, 13.35, 3.01, 2.89, 2.56, 2.47,
    7.47, 7.23, 6.41, 6.22, 13.61, 13.13, 11.63, 10.94, 14.90, 14.04,
    12.43, 11.68, 15.21, 14.55, 12.88, 12.45, 16.45, 15.77, 13.96, 13.51,
    17.13, 16.49, 14.60, 14.17, 3.14, 3.04, 2.69, 2.62, 7.84, 7.66,
    6.78, 6.57, 14.33, 13.69, 12.12, 11.34, 15.46, 14.58, 12.91, 12.24,
    15.87, 15.33, 13.58, 13.18, 17.18, 16.63, 14.73, 14.31, 17.93, 17.43,
    15.43, 14.99, 3.29, 3.21, 2.84, 2.76, 8.26, 8.09, 7.16, 6.89,
    14.98, 14.18, 12.56, 11.74, 16.00, 15.16, 13.42, 12.86, 16.61, 16.18,
    14.33, 13.91, 18.00, 17.56, 15.55, 15.08, 18.83, 18.41, 16.30, 15.77,
    1.72, 1.68, 1.48, 1.44, 4.31, 4.22, 3.73, 3.60, 7.81, 7.40,
    6.56, 6.13, 8.35, 7.91, 7.01, 6.71, 8.66, 8.44, 7.47, 7.25,
    9.39, 9.16, 8.11, 7.86, 9.82, 9.60, 8.50, 8.23, 1.92, 1.88,
    1.67, 1.61, 4.84, 4.72, 4.18, 3.99, 8.64, 8.14, 7.21, 6.77,
    9.20, 8.79, 7.78, 7.52, 9.68, 9.47, 8.39, 8.10, 10.51, 10.28,
    9.10, 8.77, 11.01, 10.77, 9.53, 9.16, 2.14, 2.09, 1.85, 1.77,
    5.37, 5.21, 4.61, 4.36, 9.41, 8.87, 7.86, 7.44, 10.07, 9.72,
    8.61, 8.36, 10.75, 10.51, 9.31, 8.91, 11.67, 11.40, 10.09, 9.64,
    12.23, 11.92, 10.55, 10.04, 2.35, 2.28, 2.02, 1.91, 5.90, 5.67,
    5.02, 4.71, 10.16, 9.63, 8.52, 8.16, 10.99, 10.70, 9.48, 9.20,
    11.85, 11.52, 10.20, 9.67, 12.86, 12.48, 11.05, 10.45, 13.47, 13.02,
    11.53, 10.86, 2.57, 2.47, 2.19, 2.05, 6.41, 6.10, 5.40, 5.05,
    10.91, 10.43, 9.23, 8.92, 11.98, 11.72, 10.38, 10.02, 12.95, 12.48,
    11.05, 10.38, 14.04, 13.50, 11.95, 11.22, 14.68, 14.05, 12.44, 11.65,
    2.78, 2.65, 2.34, 2.19, 6.89, 6.51, 5.76, 5.40, 11.69, 11.29,
    9.99, 9.70, 13.02, 12.73, 11.27, 10.79, 14.01, 13.36, 11.83, 11.07,
    15.17, 14.44, 12.79, 11.96, 15.82, 15.01, 13.29, 12.42, 2.97, 2.81,
    2.49, 2.33, 7.33, 6.90, 6.11, 5.76, 12.54, 12.21, 10.81, 10.49,
    14.10, 13.71, 12.14, 11.51, 14.99, 14.18, 12.56, 11.75, 16.22, 15.32,
    13.57, 12.70, 16.87, 15.91, 14.09, 13.22, 3.15, 2.96, 2.62, 2.47,
    7.74, 7.30, 6.47, 6.16, 13.45, 13.16, 11.65, 11.25, 15.17, 14.62,
    12.94, 12.17, 15.89, 14.97, 13.26, 12.47, 17.18, 16.18, 14.32, 13.49,
    17.84, 16.81, 14.88, 14.08, 3.31, 3.12, 2.76, 2.63, 8.14, 7.74,
    6.85, 6.59, 14.43, 14.10, 12.49, 11.96, 16.19, 15.44, 13.67, 12.79,
    16.72, 15.77, 13.96, 13.25, 18.07, 17.05, 15.10, 14.36, 18.76, 17.75,
    15.72, 15.02, 3.47, 3.29, 2.92, 2.80, 8.55, 8.21, 7.27, 7.04,
    15.44, 15.01, 13.29, 12.60, 17.12, 16.20, 14.35, 13.42, 17.53, 16.62,
    14.72, 14.11, 18.94, 17.99, 15.93, 15.31, 19.68, 18.78, 16.62, 16.03,
    3.63, 3.48, 3.08, 2.98, 9.01, 8.73, 7.73, 7.51, 16.43, 15.84,
    14.02, 13.18, 17.96, 16.92, 14.98, 14.09, 18.34, 17.56, 15.55, 15.03,
    19.84, 19.03, 16.85, 16.32, 20.66, 19.91, 17.63, 17.10, 3.81, 3.69,
    3.27, 3.17, 9.51, 9.29, 8.22, 7.97, 17.37, 16.58, 14.68, 13.73,
    18.73, 17.66, 15.63, 14.84, 19.23, 18.60, 16.47, 15.99, 20.82, 20.18,
    17.86, 17.35, 21.74, 21.14, 18.72, 18.18, 4.01, 3.91, 3.47, 3.36,
    10.07, 9.85, 8.72, 8.39, 18.23, 17.25, 15.27, 14.29, 19.46, 18.45,
    16.34, 15.66, 20.23, 19.72, 17.46, 16.94, 21.92, 21.40, 18.95, 18.37,
    22.94, 22.43, 19.86, 19.20, 4.23, 4.14, 3.67, 3.53, 10.65, 10.39,
    9.20, 8.77, 18.98, 17.88, 15.83, 14.89, 20.22, 19.35, 17.13, 16.56,
    21.33, 20.87, 18.48, 17.83, 23.14, 22.65, 20.05, 19.31, 24.25, 23.72,
    21.00, 20.14, 4.47, 4.37, 3.87, 3.69, 11.25, 10.89, 9.65, 9.11,
    19.66, 18.53, 16.41, 15.57, 21.05, 20.35, 18.02, 17.50, 22.52, 22.00,
    19.48, 18.62, 24.44, 23.86, 21.12, 20.15, 25.62, 24.94, 22.08, 20.97,
    1.21, 1.19, 1.05, 1.00, 3.05, 2.96, 2.62, 2.48, 5.35, 5.04,
    4.46, 4.23, 5.72, 5.53, 4.89, 4.75, 6.12, 5.98, 5.29, 5.06,
    6.64, 6.48, 5.74, 5.48, 6.96, 6.77, 6.00, 5.70, 1.47, 1.43,
    1.26, 1.20, 3.69, 3.54, 3.14, 2.94, 6.35, 6.01, 5.33, 5.10,
    6.87, 6.70, 5.93, 5.75, 7.41, 7.20, 6.38, 6.04, 8.05, 7.80,
    6.91, 6.53, 8.43, 8.14, 7.21, 6.79, 1.73, 1.66, 1.47, 1.38,
    4.32, 4.10, 3.63, 3.40, 7.34, 7.02, 6.21, 6.01, 8.07, 7.89,
    6.99, 6.75, 8.72, 8.40, 7.43, 6.98, 9.46, 9.08, 8.04, 7.54,
    9.88, 9.45, 8.37, 7.83, 1.98, 1.89, 1.67, 1.56, 4.92, 4.64,
    4.11, 3.85, 8.35, 8.07, 7.14, 6.94, 9.31, 9.10, 8.06, 7.71,
    10.01, 9.54, 8.45, 7.90, 10.84, 10.31, 9.13, 8.53, 11.30, 10.71,
    9.48, 8.87, 2.23, 2.10, 1.86, 1.74, 5.49, 5.17, 4.58, 4.32,
    9.40, 9.16, 8.11, 7.87, 10.58, 10.28, 9.10, 8.63, 11.24, 10.63,
    9.41, 8.81, 12.16, 11.48, 10.17, 9.52, 12.65, 11.92, 10.56, 9.91,
    2.46, 2.31, 2.05, 1.93, 6.04, 5.70, 5.05, 4.81, 10.51, 10.29,
    9.11, 8.79, 11.86, 11.42, 10.11, 9.50, 12.41, 11.69, 10.35, 9.74,
    13.41, 12.63, 11.18, 10.54, 13.93, 13.12, 11.62, 11.00, 2.67, 2.52,
    2.23, 2.13, 6.58, 6.26, 5.54, 5.33, 11.68, 11.41, 10.11, 9.67,
    13.09, 12.48, 11.05, 10.34, 13.52, 12.75, 11.29, 10.72, 14.60, 13.78,
    12.20, 11.62, 15.16, 14.35, 12.71, 12.15, 2.89, 2.74, 2.43, 2.34,
    7.13, 6.85, 6.06, 5.87, 12.87, 12.51, 11.08, 10.49, 14.26, 13.49,
    11.95, 11.18, 14.59, 13.85, 12.26, 11.77, 15.77, 14.99, 13.27, 12.76,
    16.39, 15.65, 13.86, 13.37, 3.11, 2.98, 2.64, 2.55, 7.70, 7.47,
    6.62, 6.43, 14.06, 13.54, 11.99, 11.27, 15.35, 14.46, 12.81, 12.05,
    15.68, 15.02, 13.30, 12.87, 16.96, 16.28, 14.42, 13.97, 17.66, 17.04,
    15.08, 14.64, 3.34, 3.23, 2.86, 2.78, 8.33, 8.13, 7.20, 6.97,
    15.20, 14.50, 12.84, 12.01, 16.38, 15.44, 13.67, 12.98, 16.83, 16.28,
    14.42, 14.00, 18.22, 17.67, 15.64, 15.19, 19.02, 18.51, 16.39, 15.91,
    1.97, 1.92, 1.70, 1.65, 4.95, 4.84, 4.29, 4.12, 8.95, 8.46,
    7.49, 7.01, 9.55, 9.06, 8.02, 7.70, 9.94, 9.69, 8.58, 8.32,
    10.77, 10.52, 9.31, 9.02, 11.27, 11.02, 9.76, 9.43, 2.12, 2.07,
    1.84, 1.77, 5.33, 5.20, 4.60, 4.38, 9.48, 8.93, 7.91, 7.44,
    10.10, 9.68, 8.57, 8.29, 10.67, 10.44, 9.25, 8.91, 11.58, 11.33,
    10.03, 9.65, 12.13, 11.87, 10.51, 10.07, 2.14, 2.09, 1.85, 1.76,
    5.38, 5.21, 4.61, 4.35, 9.39, 8.86, 7.84, 7.45, 10.07, 9.74,
    8.62, 8.38, 10.78, 10.53, 9.32, 8.90, 11.70, 11.41, 10.11, 9.63,
    12.26, 11.93, 10.56, 10.02, 2.16, 2.09, 1.85, 1.75, 5.42, 5.19,
    4.60, 4.31, 9.30, 8.82, 7.81, 7.49, 10.09, 9.83, 8.71, 8.45,
    10.89, 10.57, 9.36, 8.85, 11.82, 11.44, 10.13, 9.56, 12.37, 11.93,
    10.56, 9.94, 2.18, 2.09, 1.85, 1.73, 5.43, 5.15, 4.56, 4.27,
    9.22, 8.83, 7.82, 7.56, 10.16, 9.94, 8.80, 8.48, 10.97, 10.55,
    9.34, 8.77, 11.90, 11.41, 10.10, 9.47, 12.43, 11.87, 10.51, 9.83,
    1.48, 1.43, 1.26, 1.18, 3.70, 3.52, 3.11, 2.91, 6.29, 6.02,
    5.33, 5.15, 6.92, 6.77, 5.99, 5.78, 7.48, 7.19, 6.37, 5.98,
    8.11, 7.78, 6.89, 6.46, 8.47, 8.10, 7.17, 6.71, 1.79, 1.70,
    1.50, 1.41, 4.43, 4.18, 3.70, 3.47, 7.52, 7.27, 6.43, 6.25,
    8.39, 8.19, 7.25, 6.94, 9.01, 8.58, 7.60, 7.10, 9.75, 9.27,
    8.21, 7.67, 10.17, 9.63, 8.53, 7.98, 2.08, 1.96, 1.74, 1.63,
    5.12, 4.82, 4.27, 4.03, 8.78, 8.56, 7.58, 7.35, 9.88, 9.60,
    8.50, 8.05, 10.49, 9.91, 8.78, 8.22, 11.34, 10.71, 9.48, 8.88,
    11.80, 11.12, 9.85, 9.25, 2.36, 2.22, 1.96, 1.85, 5.79, 5.47,
    4.85, 4.62, 10.10, 9.88, 8.75, 8.44, 11.39, 10.96, 9.70, 9.11,
    11.90, 11.21, 9.93, 9.35, 12.86, 12.11, 10.73, 10.12, 13.36, 12.59,
    11.15, 10.56, 2.62, 2.48, 2.19, 2.09, 6.45, 6.14, 5.44, 5.24,
    11.47, 11.21, 9.93, 9.49, 12.86, 12.25, 10.85, 10.14, 13.26, 12.51,
    11.08, 10.53, 14.32, 13.53, 11.98, 11.41, 14.88, 14.09, 12.47, 11.94,
    2.89, 2.74, 2.43, 2.34, 7.12, 6.85, 6.06, 5.88, 12.88, 12.51,
    11.08, 10.49, 14.26, 13.48, 11.94, 11.17, 14.58, 13.85, 12.26, 11.77,
    15.76, 14.99, 13.27, 12.77, 16.38, 15.65, 13.86, 13.38, 3.15, 3.03,
    2.68, 2.60, 7.82, 7.60, 6.72, 6.53, 14.28, 13.75, 12.17, 11.43,
    15.58, 14.67, 12.99, 12.23, 15.92, 15.26, 13.51, 13.08, 17.21, 16.54,
    14.64, 14.19, 17.93, 17.31, 15.32, 14.88, 3.43, 3.33, 2.95, 2.86,
    8.57, 8.37, 7.41, 7.18, 15.64, 14.90, 13.20, 12.34, 16.83, 15.88,
    14.06, 13.36, 17.31, 16.76, 14.84, 14.41, 18.74, 18.18, 16.10, 15.64,
    19.57, 19.05, 16.87, 16.38, 3.73, 3.64, 3.22, 3.12, 9.36, 9.16,
    8.11, 7.79, 16.91, 15.99, 14.16, 13.25, 18.05, 17.13, 15.17, 14.56,
    18.79, 18.34, 16.24, 15.74, 20.38, 19.90, 17.62, 17.07, 21.33, 20.86,
    18.47, 17.84, 4.05, 3.96, 3.51, 3.37, 10.19, 9.93, 8.79, 8.37,
    18.09, 17.04, 15.09, 14.21, 19.28, 18.48, 16.36, 15.84, 20.39, 19.95,
    17.67, 17.02, 22.12, 21.65, 19.17, 18.43, 23.18, 22.67, 20.07, 19.22,
    2.41, 2.35, 2.08, 1.98, 6.06, 5.86, 5.19, 4.89, 10.56, 9.96,
    8.82, 8.38, 11.32, 10.96, 9.71, 9.43, 12.14, 11.85, 10.49, 10.01,
    13.17, 12.85, 11.37, 10.83, 13.81, 13.42, 11.89, 11.27, 2.60, 2.51,
    2.23, 2.10, 6.50, 6.23, 5.52, 5.17, 11.15, 10.58, 9.37, 8.99,
    12.11, 11.81, 10.46, 10.14, 13.08, 12.68, 11.23, 10.61, 14.19, 13.73,
    12.16, 11.47, 14.85, 14.31, 12.67, 11.92, 2.61, 2.51, 2.22, 2.08,
    6.51, 6.18, 5.47, 5.12, 11.06, 10.60, 9.38, 9.08, 12.19, 11.93,
    10.57, 10.18, 13.17, 12.65, 11.20, 10.51, 14.28, 13.69, 12.12, 11.35,
    14.92, 14.24, 12.61, 11.79, 2.62, 2.49, 2.20, 2.06, 6.48, 6.12,
    5.42, 5.08, 11.02, 10.67, 9.45, 9.17, 12.32, 12.03, 10.65, 10.17,
    13.21, 12.57, 11.13, 10.40, 14.30, 13.58, 12.02, 11.24, 14.91, 14.11,
    12.49, 11.68, 2.61, 2.46, 2.18, 2.04, 6.43, 6.06, 5.36, 5.07,
    11.05, 10.77, 9.54, 9.25, 12.44, 12.07, 10.69, 10.10, 13.17, 12.44,
    11.02, 10.32, 14.25, 13.44, 11.90, 11.16, 14.82, 13.96, 12.36, 11.62,
    1.73, 1.63, 1.45, 1.35, 4.27, 4.02, 3.56, 3.36, 7.32, 7.14,
    6.32, 6.13, 8.24, 8.00, 7.08, 6.70, 8.74, 8.25, 7.31, 6.84,
    9.45, 8.92, 7.89, 7.40, 9.83, 9.26, 8.20, 7.71, 2.06, 1.94,
    1.72, 1.62, 5.07, 4.79, 4.24, 4.04, 8.84, 8.65, 7.66, 7.39,
    9.97, 9.58, 8.49, 7.96, 10.41, 9.80, 8.68, 8.18, 11.25, 10.59,
    9.38, 8.85, 11.68, 11.01, 9.75, 9.24, 2.38, 2.25, 1.99, 1.90,
    5.85, 5.58, 4.94, 4.76, 10.42, 10.18, 9.01, 8.61, 11.67, 11.11,
    9.84, 9.20, 12.02, 11.35, 10.05, 9.56, 12.99, 12.27, 10.86, 10.36,
    13.49, 12.78, 11.32, 10.84, 2.69, 2.56, 2.27, 2.18, 6.65, 6.40,
    5.66, 5.49, 12.03, 11.68, 10.34, 9.78, 13.30, 12.57, 11.13, 10.42,
    13.60, 12.92, 11.44, 10.99, 14.70, 13.99, 12.39, 11.93, 15.28, 14.61,
    12.94, 12.50, 3.01, 2.89, 2.56, 2.48, 7.47, 7.26, 6.42, 6.24,
    13.64, 13.12, 11.61, 10.90, 14.86, 14.00, 12.39, 11.68, 15.19, 14.57,
    12.90, 12.49, 16.42, 15.80, 13.99, 13.56, 17.11, 16.53, 14.64, 14.21,
    3.34, 3.24, 2.87, 2.78, 8.33, 8.15, 7.21, 6.98, 15.21, 14.48,
    12.82, 11.99, 16.35, 15.43, 13.66, 12.99, 16.83, 16.31, 14.44, 14.02,
    18.22, 17.69, 15.66, 15.22, 19.03, 18.54, 16.42, 15.93, 3.68, 3.60,
    3.18, 3.08, 9.25, 9.05, 8.01, 7.69, 16.69, 15.77, 13.97, 13.08,
    17.80, 16.91, 14.97, 14.39, 18.56, 18.12, 16.04, 15.55, 20.12, 19.66,
    17.41, 16.86, 21.06, 20.61, 18.25, 17.62, 4.05, 3.96, 3.51, 3.37,
    10.19, 9.93, 8.79, 8.36, 18.08, 17.03, 15.08, 14.20, 19.27, 18.49,
    16.37, 15.85, 20.40, 19.97, 17.68, 17.02, 22.14, 21.66, 19.18, 18.43,
    23.20, 22.68, 20.08, 19.22, 4.43, 4.32, 3.83, 3.65, 11.15, 10.77,
    9.54, 8.99, 19.40, 18.30, 16.20, 15.41, 20.82, 20.17, 17.86, 17.35,
    22.33, 21.79, 19.30, 18.41, 24.23, 23.62, 20.92, 19.91, 25.40, 24.68,
    21.85, 20.71, 4.82, 4.67, 4.13, 3.90, 12.08, 11.56, 10.23, 9.58,
    20.68, 19.64, 17.39, 16.70, 22.48, 21.94, 19.43, 18.83, 24.29, 23.54,
    20.84, 19.69, 26.35, 25.48, 22.56, 21.27, 27.58, 26.56, 23.52, 22.10,
    2.86, 2.74, 2.43, 2.27, 7.12, 6.75, 5.98, 5.59, 12.09, 11.60,
    10.27, 9.94, 13.35, 13.06, 11.56, 11.14, 14.41, 13.84, 12.25, 11.49,
    15.62, 14.96, 13.25, 12.41, 16.32, 15.56, 13.78, 12.89, 3.05, 2.90,
    2.57, 2.40, 7.56, 7.13, 6.31, 5.92, 12.86, 12.45, 11.03, 10.71,
    14.38, 14.04, 12.43, 11.86, 15.41, 14.65, 12.97, 12.13, 16.68, 15.83,
    14.02, 13.10, 17.38, 16.45, 14.56, 13.62, 3.04, 2.87, 2.54, 2.38,
    7.50, 7.06, 6.25, 5.91, 12.89, 12.58, 11.14, 10.80, 14.53, 14.08,
    12.47, 11.78, 15.36, 14.51, 12.84, 12.03, 16.61, 15.67, 13.87, 13.01,
    17.28, 16.27, 14.41, 13.56, 3.02, 2.84, 2.52, 2.38, 7.42, 7.02,
    6.21, 5.94, 12.99, 12.71, 11.25, 10.84, 14.63, 14.05, 12.44, 11.66,
    15.25, 14.36, 12.71, 11.99, 16.47, 15.52, 13.74, 12.99, 17.11, 16.13,
    14.29, 13.56, 2.99, 2.82, 2.50, 2.38, 7.35, 7.01, 6.21, 5.99,
    13.12, 12.81, 11.34, 10.82, 14.67, 13.95, 12.35, 11.54, 15.09, 14.25,
    12.62, 12.02, 16.30, 15.42, 13.65, 13.03, 16.93, 16.06, 14.22, 13.64,
    1.94, 1.83, 1.62, 1.55, 4.77, 4.55, 4.03, 3.89, 8.51, 8.31,
    7.36, 7.03, 9.52, 9.06, 8.02, 7.50, 9.81, 9.26, 8.20, 7.80,
    10.59, 10.01, 8.87, 8.46, 11.00, 10.43, 9.24, 8.85, 2.31, 2.20,
    1.94, 1.87, 5.70, 5.49, 4.86, 4.71, 10.32, 10.01, 8.86, 8.38,
    11.40, 10.77, 9.53, 8.93, 11.65, 11.08, 9.81, 9.43, 12.59, 11.99,
    10.62, 10.23, 13.09, 12.53, 11.09, 10.72, 2.67, 2.57, 2.28, 2.21,
    6.64, 6.45, 5.71, 5.55, 12.13, 11.66, 10.32, 9.68, 13.20, 12.43,
    11.01, 10.38, 13.49, 12.96, 11.47, 11.11, 14.60, 14.05, 12.44, 12.06,
    15.21, 14.70, 13.02, 12.64, 3.05, 2.96, 2.62, 2.55, 7.62, 7.45,
    6.60, 6.38, 13.90, 13.23, 11.71, 10.95, 14.94, 14.10, 12.48, 11.88,
    15.38, 14.92, 13.21, 12.83, 16.66, 16.19, 14.33, 13.92, 17.41, 16.96,
    15.02, 14.57, 3.44, 3.37, 2.98, 2.89, 8.65, 8.46, 7.49, 7.19,
    15.60, 14.74, 13.05, 12.22, 16.63, 15.81, 14.00, 13.46, 17.36, 16.95,
    15.01, 14.55, 18.83, 18.40, 16.29, 15.77, 19.71, 19.28, 17.07, 16.48,
    3.86, 3.78, 3.34, 3.21, 9.72, 9.46, 8.38, 7.96, 17.21, 16.21,
    14.35, 13.53, 18.35, 17.61, 15.60, 15.11, 19.44, 19.03, 16.85, 16.21,
    21.10, 20.64, 18.28, 17.55, 22.11, 21.61, 19.13, 18.30, 4.29, 4.18,
    3.70, 3.52, 10.79, 10.42, 9.22, 8.69, 18.74, 17.69, 15.66, 14.91,
    20.13, 19.52, 17.28, 16.79, 21.61, 21.08, 18.67, 17.79, 23.45, 22.85,
    20.23, 19.24, 24.58, 23.87, 21.14, 20.01, 4.73, 4.57, 4.05, 3.81,
    11.83, 11.32, 10.02, 9.38, 20.24, 19.24, 17.03, 16.37, 22.03, 21.51,
    19.04, 18.46, 23.81, 23.06, 20.42, 19.27, 25.83, 24.96, 22.10, 20.83,
    27.03, 26.01, 23.03, 21.63, 5.15, 4.93, 4.37, 4.09, 12.82, 12.15,
    10.76, 10.06, 21.76, 20.89, 18.50, 17.91, 24.05, 23.54, 20.84, 20.06,
    25.97, 24.91, 22.05, 20.67, 28.14, 26.93, 23.85, 22.33, 29.39, 28.01,
    24.80, 23.19, 5.55, 5.27, 4.66, 4.36, 13.74, 12.95, 11.47, 10.77,
    23.38, 22.66, 20.06, 19.49, 26.17, 25.53, 22.61, 21.55, 28.02, 26.62,
    23.57, 22.03, 30.33, 28.76, 25.47, 23.81, 31.60, 29.88, 26.45, 24.76,
    3.26, 3.07, 2.72, 2.55, 8.03, 7.56, 6.69, 6.34, 13.82, 13.49,
    11.94, 11.58, 15.58, 15.09, 13.36, 12.61, 16.45, 15.53, 13.75, 12.89,
    17.79, 16.77, 14.85, 13.94, 18.50, 17.42, 15.43, 14.52, 3.45, 3.25,
    2.87, 2.72, 8.47, 8.02, 7.10, 6.79, 14.85, 14.53, 12.87, 12.39,
    16.73, 16.05, 14.21, 13.32, 17.41, 16.40, 14.52, 13.71, 18.81, 17.72,
    15.69, 14.84, 19.54, 18.43, 16.32, 15.50, 3.41, 3.22, 2.86, 2.73,
    8.39, 8.01, 7.10, 6.85, 15.01, 14.64, 12.96, 12.36, 16.76, 15.93,
    14.10, 13.18, 17.23, 16.28, 14.42, 13.75, 18.62, 17.61, 15.59, 14.90,
    19.34, 18.36, 16.25, 15.60, 3.38, 3.22, 2.85, 2.75, 8.35, 8.05,
    7.13, 6.92, 15.16, 14.68, 13.00, 12.28, 16.71, 15.77, 13.96, 13.08,
    17.06, 16.25, 14.38, 13.85, 18.44, 17.60, 15.58, 15.03, 19.18, 18.38,
    16.28, 15.75, 3.36, 3.23, 2.86, 2.78, 8.35, 8.13, 7.19, 6.99,
    15.26, 14.64, 12.96, 12.16, 16.57, 15.61, 13.82, 13.05, 16.95, 16.30,
    14.43, 13.99, 18.34, 17.68, 15.65, 15.18, 19.12, 18.51, 16.39, 15.91,
    1.57, 1.52, 1.34, 1.30, 3.91, 3.81, 3.37, 3.27, 7.15, 6.87,
    6.08, 5.70, 7.77, 7.32, 6.48, 6.12, 7.95, 7.64, 6.76, 6.55,
    8.60, 8.28, 7.33, 7.11, 8.96, 8.67, 7.68, 7.45, 2.00, 1.94,
    1.72, 1.67, 5.01, 4.89, 4.33, 4.19, 9.12, 8.68, 7.68, 7.18,
    9.79, 9.25, 8.19, 7.80, 10.10, 9.80, 8.67, 8.43, 10.94, 10.63,
    9.41, 9.14, 11.43, 11.14, 9.86, 9.57, 2.44, 2.39, 2.11, 2.04,
    6.13, 6.00, 5.31, 5.09, 11.05, 10.43, 9.24, 8.65, 11.77, 11.20,
    9.92, 9.54, 12.30, 12.02, 10.64, 10.31, 13.34, 13.04, 11.55, 11.17,
    13.97, 13.67, 12.10, 11.67, 2.90, 2.83, 2.51, 2.41, 7.29, 7.10,
    6.29, 5.97, 12.90, 12.15, 10.76, 10.14, 13.76, 13.22, 11.70, 11.34,
    14.59, 14.28, 12.64, 12.16, 15.84, 15.49, 13.72, 13.16, 16.60, 16.21,
    14.36, 13.72, 3.37, 3.28, 2.90, 2.76, 8.46, 8.17, 7.23, 6.81,
    14.68, 13.86, 12.28, 11.69, 15.79, 15.31, 13.56, 13.17, 16.96, 16.54,
    14.64, 13.95, 18.40, 17.92, 15.87, 15.08, 19.29, 18.72, 16.57, 15.68,
    3.84, 3.71, 3.29, 3.10, 9.62, 9.19, 8.14, 7.61, 16.43, 15.63,
    13.84, 13.31, 17.91, 17.49, 15.49, 15.00, 19.36, 18.73, 16.59, 15.65,
    21.00, 20.28, 17.95, 16.91, 21.97, 21.13, 18.71, 17.56, 4.31, 4.12,
    3.65, 3.42, 10.72, 10.16, 9.00, 8.41, 18.20, 17.48, 15.48, 15.00,
    20.14, 19.70, 17.45, 16.78, 21.73, 20.83, 18.44, 17.28, 23.55, 22.52,
    19.94, 18.66, 24.59, 23.42, 20.73, 19.39, 2.62, 2.48, 2.20, 2.05,
    6.47, 6.10, 5.40, 5.07, 11.02, 10.69, 9.47, 9.19, 12.35, 12.04,
    10.66, 10.16, 13.21, 12.54, 11.10, 10.38, 14.30, 13.55, 12.00, 11.22,
    14.89, 14.07, 12.46, 11.67, 2.61, 2.46, 2.17, 2.04, 6.42, 6.05,
    5.35, 5.07, 11.06, 10.80, 9.56, 9.26, 12.47, 12.07, 10.69, 10.08,
    13.16, 12.41, 10.99, 10.31, 14.22, 13.41, 11.87, 11.15, 14.79, 13.93,
    12.33, 11.62, 2.58, 2.43, 2.15, 2.04, 6.35, 6.01, 5.32, 5.09,
    11.15, 10.91, 9.66, 9.29, 12.55, 12.03, 10.65, 9.98, 13.05, 12.29,
    10.88, 10.28, 14.10, 13.28, 11.76, 11.13, 14.64, 13.82, 12.23, 11.63,
    2.56, 2.42, 2.14, 2.05, 6.29, 6.01, 5.32, 5.14, 11.26, 10.99,
    9.73, 9.27, 12.57, 11.94, 10.57, 9.88, 12.91, 12.21, 10.81, 10.31,
    13.95, 13.21, 11.69, 11.18, 14.49, 13.77, 12.19, 11.71, 2.53, 2.42,
    2.14, 2.06, 6.26, 6.04, 5.35, 5.19, 11.37, 11.01, 9.75, 9.20,
    12.52, 11.82, 10.46, 9.81, 12.79, 12.19, 10.79, 10.39, 13.82, 13.20,
    11.69, 11.28, 14.38, 13.79, 12.21, 11.82, 2.52, 2.43, 2.15, 2.09,
    6.26, 6.10, 5.40, 5.24, 11.45, 10.98, 9.72, 9.11, 12.42, 11.70,
    10.36, 9.78, 12.71, 12.23, 10.83, 10.50, 13.75, 13.26, 11.74, 11.40,
    14.34, 13.89, 12.30, 11.94, 2.52, 2.45, 2.17, 2.11, 6.30, 6.16,
    5.46, 5.27, 11.47, 10.89, 9.65, 9.02, 12.29, 11.62, 10.29, 9.81,
    12.69, 12.33, 10.92, 10.61, 13.75, 13.38, 11.85, 11.51, 14.37, 14.03,
    12.42, 12.04, 2.53, 2.47, 2.19, 2.12, 6.36, 6.22, 5.51, 5.27,
    11.43, 10.78, 9.55, 8.95, 12.17, 11.60, 10.27, 9.89, 12.75, 12.46,
    11.03, 10.68, 13.83, 13.52, 11.97, 11.57, 14.48, 14.17, 12.55, 12.09,
    1.76, 1.72, 1.52, 1.47, 4.41, 4.32, 3.82, 3.66, 7.94, 7.49,
    6.64, 6.22, 8.46, 8.05, 7.13, 6.86, 8.85, 8.65, 7.66, 7.41,
    9.60, 9.39, 8.31, 8.03, 10.05, 9.84, 8.71, 8.39, 2.26, 2.21,
    1.95, 1.87, 5.68, 5.52, 4.89, 4.64, 10.03, 9.44, 8.36, 7.89,
    10.69, 10.28, 9.10, 8.83, 11.36, 11.11, 9.84, 9.46, 12.33, 12.06,
    10.67, 10.24, 12.92, 12.62, 11.17, 10.67, 2.77, 2.69, 2.39, 2.27,
    6.95, 6.71, 5.94, 5.59, 12.05, 11.38, 10.08, 9.61, 12.97, 12.59,
    11.14, 10.83, 13.94, 13.59, 12.03, 11.45, 15.13, 14.72, 13.04, 12.38,
    15.85, 15.37, 13.61, 12.87, 3.29, 3.17, 2.81, 2.65, 8.22, 7.85,
    6.95, 6.50, 14.04, 13.36, 11.83, 11.38, 15.31, 14.96, 13.25, 12.83,
    16.56, 16.01, 14.18, 13.37, 17.96, 17.33, 15.34, 14.44, 18.79, 18.05,
    15.98, 15.00, 3.80, 3.63, 3.22, 3.01, 9.45, 8.95, 7.92, 7.41,
    16.03, 15.41, 13.65, 13.23, 17.76, 17.38, 15.38, 14.79, 19.16, 18.34,
    16.24, 15.21, 20.76, 19.83, 17.56, 16.43, 21.67, 20.62, 18.26, 17.07,
    4.30, 4.07, 3.60, 3.37, 10.62, 10.01, 8.86, 8.33, 18.09, 17.56,
    15.55, 15.10, 20.28, 19.77, 17.51, 16.67, 21.68, 20.57, 18.21, 17.03,
    23.46, 22.22, 19.68, 18.40, 24.43, 23.08, 20.44, 19.14, 4.77, 4.49,
    3.98, 3.74, 11.74, 11.06, 9.79, 9.29, 20.26, 19.79, 17.52, 16.97,
    22.84, 22.09, 19.56, 18.45, 24.08, 22.71, 20.11, 18.86, 26.03, 24.53,
    21.72, 20.40, 27.06, 25.48, 22.56, 21.26, 2.87, 2.70, 2.39, 2.26,
    7.05, 6.68, 5.91, 5.66, 12.40, 12.13, 10.74, 10.32, 13.95, 13.36,
    11.83, 11.08, 14.49, 13.65, 12.08, 11.42, 15.65, 14.75, 13.06, 12.37,
    16.26, 15.34, 13.59, 12.93, 2.84, 2.69, 2.38, 2.27, 6.99, 6.68,
    5.92, 5.72, 12.53, 12.21, 10.81, 10.29, 13.97, 13.25, 11.74, 10.97,
    14.34, 13.56, 12.01, 11.46, 15.49, 14.67, 12.99, 12.43, 16.09, 15.29,
    13.54, 13.02, 2.81, 2.68, 2.38, 2.29, 6.96, 6.72, 5.95, 5.78,
    12.65, 12.23, 10.83, 10.22, 13.91, 13.12, 11.62, 10.89, 14.20, 13.54,
    11.99, 11.56, 15.35, 14.67, 12.99, 12.54, 15.97, 15.33, 13.57, 13.15,
    2.80, 2.70, 2.39, 2.32, 6.96, 6.78, 6.00, 5.83, 12.73, 12.19,
    10.79, 10.11, 13.79, 12.99, 11.50, 10.87, 14.12, 13.60, 12.04, 11.68,
    15.28, 14.75, 13.06, 12.67, 15.93, 15.44, 13.67, 13.28, 2.80, 2.72,
    2.41, 2.34, 7.00, 6.85, 6.07, 5.86, 12.74, 12.10, 10.71, 10.01,
    13.65, 12.91, 11.43, 10.91, 14.11, 13.71, 12.14, 11.79, 15.28, 14.88,
    13.18, 12.79, 15.98, 15.60, 13.81, 13.39, 2.81, 2.75, 2.44, 2.35,
    7.07, 6.91, 6.12, 5.86, 12.69, 11.97, 10.60, 9.94, 13.52, 12.89,
    11.41, 11.00, 14.17, 13.86, 12.27, 11.87, 15.37, 15.04, 13.32, 12.86,
    16.10, 15.76, 13.95, 13.43, 2.84, 2.78, 2.46, 2.36, 7.15, 6.94,
    6.15, 5.83, 12.59, 11.85, 10.50, 9.92, 13.44, 12.94, 11.46, 11.11,
    14.30, 13.99, 12.39, 11.89, 15.52, 15.17, 13.43, 12.87, 16.27, 15.87,
    14.06, 13.40, 2.87, 2.79, 2.47, 2.34, 7.21, 6.94, 6.14, 5.77,
    12.46, 11.78, 10.43, 9.95, 13.43, 13.05, 11.55, 11.22, 14.45, 14.07,
    12.46, 11.84, 15.68, 15.25, 13.50, 12.80, 16.43, 15.92, 14.09, 13.31,
    1.97, 1.92, 1.70, 1.61, 4.95, 4.77, 4.23, 3.97, 8.57, 8.10,
    7.17, 6.84, 9.23, 8.97, 7.94, 7.71, 9.93, 9.67, 8.56, 8.14,
    10.77, 10.48, 9.28, 8.81, 11.29, 10.94, 9.69, 9.16, 2.53, 2.44,
    2.16, 2.04, 6.33, 6.04, 5.35, 5.00, 10.80, 10.29, 9.11, 8.77,
    11.80, 11.53, 10.21, 9.88, 12.76, 12.33, 10.91, 10.28, 13.83, 13.34,
    11.81, 11.11, 14.47, 13.90, 12.30, 11.54, 3.09, 2.95, 2.61, 2.45,
    7.68, 7.27, 6.44, 6.02, 13.03, 12.54, 11.10, 10.76, 14.45, 14.14,
    12.52, 12.02, 15.58, 14.91, 13.20, 12.36, 16.88, 16.12, 14.27, 13.35,
    17.62, 16.75, 14.84, 13.87, 3.63, 3.44, 3.05, 2.85, 8.98, 8.46,
    7.49, 7.04, 15.31, 14.87, 13.17, 12.79, 17.18, 16.74, 14.82, 14.10,
    18.34, 17.39, 15.40, 14.40, 19.85, 18.79, 16.64, 15.56, 20.67, 19.52,
    17.28, 16.19, 4.16, 3.92, 3.47, 3.26, 10.23, 9.65, 8.54, 8.10,
    17.68, 17.28, 15.30, 14.81, 19.94, 19.27, 17.07, 16.08, 20.99, 19.80,
    17.53, 16.45, 22.69, 21.38, 18.93, 17.79, 23.59, 22.21, 19.67, 18.55,
    4.66, 4.39, 3.88, 3.68, 11.45, 10.85, 9.61, 9.21, 20.16, 19.72,
    17.46, 16.77, 22.67, 21.70, 19.22, 17.99, 23.53, 22.16, 19.62, 18.56,
    25.42, 23.96, 21.21, 20.11, 26.40, 24.92, 22.07, 21.02, 5.14, 4.87,
    4.31, 4.12, 12.66, 12.11, 10.72, 10.37, 22.72, 22.14, 19.60, 18.65,
    25.31, 24.01, 21.26, 19.87, 25.97, 24.57, 21.75, 20.79, 28.05, 26.58,
    23.54, 22.54, 29.15, 27.72, 24.54, 23.61, 3.09, 2.95, 2.62, 2.53,
    7.65, 7.39, 6.55, 6.36, 13.92, 13.46, 11.91, 11.23, 15.29, 14.42,
    12.77, 11.98, 15.61, 14.90, 13.19, 12.72, 16.88, 16.14, 14.29, 13.81,
    17.56, 16.87, 14.94, 14.47, 3.08, 2.97, 2.63, 2.55, 7.66, 7.47,
    6.61, 6.41, 14.00, 13.40, 11.87, 11.12, 15.16, 14.28, 12.64, 11.96,
    15.53, 14.96, 13.25, 12.86, 16.80, 16.23, 14.37, 13.95, 17.52, 17.00,
    15.05, 14.62, 3.08, 3.00, 2.65, 2.58, 7.71, 7.54, 6.68, 6.45,
    14.01, 13.30, 11.77, 11.01, 15.00, 14.19, 12.57, 12.01, 15.52, 15.10,
    13.37, 12.98, 16.82, 16.38, 14.51, 14.08, 17.58, 17.17, 15.20, 14.73,
    3.10, 3.03, 2.68, 2.59, 7.79, 7.61, 6.74, 6.44, 13.95, 13.16,
    11.65, 10.93, 14.86, 14.18, 12.55, 12.11, 15.60, 15.26, 13.51, 13.06,
    16.92, 16.55, 14.66, 14.15, 17.73, 17.35, 15.36, 14.77, 3.13, 3.06,
    2.71, 2.59, 7.87, 7.64, 6.76, 6.41, 13.83, 13.03, 11.54, 10.91,
    14.78, 14.24, 12.61, 12.23, 15.74, 15.40, 13.63, 13.07, 17.09, 16.70,
    14.79, 14.15, 17.91, 17.47, 15.47, 14.74, 3.16, 3.07, 2.72, 2.58,
    7.93, 7.63, 6.76, 6.35, 13.69, 12.95, 11.47, 10.95, 14.77, 14.36,
    12.72, 12.35, 15.91, 15.48, 13.71, 13.02, 17.26, 16.78, 14.85, 14.08,
    18.09, 17.51, 15.50, 14.63, 3.19, 3.07, 2.72, 2.55, 7.96, 7.59,
    6.72, 6.28, 13.56, 12.93, 11.45, 11.04, 14.85, 14.52, 12.85, 12.43,
    16.05, 15.49, 13.72, 12.91, 17.41, 16.76, 14.84, 13.95, 18.21, 17.46,
    15.46, 14.49, 3.20, 3.05, 2.70, 2.53, 7.95, 7.51, 6.65, 6.23,
    13.48, 12.99, 11.50, 11.16, 14.98, 14.65, 12.97, 12.44, 16.14, 15.42,
    13.65, 12.78, 17.48, 16.67, 14.76, 13.80, 18.24, 17.32, 15.34, 14.34,
    2.18, 2.08, 1.84, 1.73, 5.42, 5.13, 4.54, 4.25, 9.20, 8.85,
    7.84, 7.60, 10.21, 9.98, 8.84, 8.49, 11.00, 10.52, 9.31, 8.72,
    11.92, 11.37, 10.07, 9.42, 12.44, 11.82, 10.46, 9.78, 2.77, 2.63,
    2.33, 2.18, 6.85, 6.46, 5.72, 5.38, 11.69, 11.36, 10.06, 9.77,
    13.13, 12.78, 11.32, 10.76, 14.00, 13.27, 11.75, 10.99, 15.15, 14.34,
    12.70, 11.88, 15.78, 14.89, 13.18, 12.35, 3.35, 3.16, 2.79, 2.63,
    8.24, 7.77, 6.88, 6.53, 14.26, 13.94, 12.34, 11.94, 16.09, 15.54,
    13.76, 12.96, 16.92, 15.95, 14.12, 13.26, 18.29, 17.23, 15.26, 14.35,
    19.01, 17.90, 15.85, 14.96, 3.90, 3.68, 3.26, 3.09, 9.60, 9.10,
    8.06, 7.73, 16.93, 16.56, 14.66, 14.08, 19.03, 18.20, 16.12, 15.09,
    19.73, 18.59, 16.46, 15.58, 21.31, 20.09, 17.79, 16.88, 22.13, 20.91,
    18.51, 17.64, 4.44, 4.21, 3.73, 3.57, 10.95, 10.48, 9.28, 8.98,
    19.67, 19.16, 16.97, 16.13, 21.89, 20.76, 18.38, 17.18, 22.45, 21.25,
    18.82, 18.00, 24.25, 23.00, 20.36, 19.52, 25.20, 23.98, 21.24, 20.44,
    4.98, 4.76, 4.22, 4.07, 12.33, 11.92, 10.56, 10.25, 22.45, 21.68,
    19.20, 18.09, 24.63, 23.22, 20.56, 19.30, 25.15, 24.01, 21.26, 20.52,
    27.19, 26.01, 23.03, 22.27, 28.29, 27.20, 24.08, 23.34, 5.53, 5.34,
    4.73, 4.59, 13.77, 13.43, 11.89, 11.54, 25.18, 24.08, 21.32, 19.96,
    27.23, 25.65, 22.71, 21.50, 27.90, 26.91, 23.83, 23.13, 30.20, 29.19,
    25.85, 25.10, 31.50, 30.58, 27.07, 26.30, 3.36, 3.27, 2.90, 2.81,
    8.42, 8.24, 7.29, 7.03, 15.29, 14.49, 12.83, 12.00, 16.35, 15.48,
    13.70, 13.10, 16.94, 16.48, 14.59, 14.17, 18.35, 17.89, 15.84, 15.37,
    19.19, 18.75, 16.60, 16.08, 3.38, 3.31, 2.93, 2.83, 8.50, 8.30,
    7.35, 7.03, 15.21, 14.34, 12.70, 11.92, 16.20, 15.47, 13.70, 13.22,
    17.03, 16.65, 14.75, 14.25, 18.47, 18.07, 16.00, 15.44, 19.35, 18.93,
    16.77, 16.12, 3.41, 3.34, 2.95, 2.83, 8.59, 8.34, 7.38, 6.98,
    15.08, 14.21, 12.58, 11.90, 16.12, 15.54, 13.76, 13.36, 17.19, 16.81,
    14.88, 14.26, 18.65, 18.23, 16.14, 15.43, 19.55, 19.06, 16.88, 16.07,
    3.45, 3.35, 2.97, 2.81, 8.66, 8.32, 7.37, 6.92, 14.92, 14.12,
    12.50, 11.95, 16.12, 15.68, 13.89, 13.48, 17.37, 16.90, 14.96, 14.20,
    18.85, 18.30, 16.21, 15.35, 19.74, 19.10, 16.91, 15.95, 3.48, 3.35,
    2.96, 2.78, 8.68, 8.27, 7.32, 6.85, 14.79, 14.11, 12.49, 12.06,
    16.20, 15.85, 14.03, 13.56, 17.52, 16.90, 14.96, 14.07, 19.00, 18.28,
    16.19, 15.20, 19.87, 19.03, 16.85, 15.79, 3.49, 3.33, 2.95, 2.76,
    8.67, 8.19, 7.25, 6.79, 14.71, 14.18, 12.55, 12.18, 16.35, 15.99,
    14.16, 13.57, 17.61, 16.81, 14.88, 13.93, 19.07, 18.17, 16.09, 15.05,
    19.89, 18.88, 16.72, 15.63, 3.49, 3.30, 2.92, 2.73, 8.61, 8.11,
    7.18, 6.76, 14.70, 14.31, 12.67, 12.30, 16.53, 16.08, 14.24, 13.51,
    17.60, 16.66, 14.75, 13.80, 19.04, 18.00, 15.94, 14.91, 19.81, 18.69,
    16.55, 15.52, 3.46, 3.26, 2.89, 2.72, 8.52, 8.04, 7.12, 6.77,
    14.78, 14.46, 12.80, 12.37, 16.67, 16.08, 14.24, 13.40, 17.50, 16.49,
    14.60, 13.72, 18.91, 17.81, 15.77, 14.85, 19.65, 18.51, 16.39, 15.49,
    1.92, 1.81, 1.60, 1.51, 4.72, 4.46, 3.95, 3.75, 8.18, 8.00,
    7.09, 6.85, 9.23, 8.91, 7.89, 7.43, 9.70, 9.14, 8.09, 7.60,
    10.48, 9.87, 8.74, 8.23, 10.89, 10.26, 9.08, 8.58, 2.54, 2.39,
    2.12, 2.01, 6.23, 5.92, 5.24, 5.03, 11.01, 10.77, 9.54, 9.15,
    12.37, 11.83, 10.47, 9.80, 12.81, 12.07, 10.69, 10.13, 13.84, 13.05,
    11.56, 10.97, 14.37, 13.58, 12.03, 11.47, 3.14, 2.97, 2.63, 2.52,
    7.73, 7.41, 6.56, 6.35, 13.91, 13.54, 11.99, 11.39, 15.47, 14.65,
    12.97, 12.13, 15.85, 15.01, 13.29, 12.72, 17.12, 16.24, 14.38, 13.80,
    17.79, 16.95, 15.00, 14.45, 3.73, 3.57, 3.16, 3.06, 9.24, 8.95,
    7.92, 7.70, 16.84, 16.26, 14.40, 13.55, 18.46, 17.40, 15.41, 14.47,
    18.85, 18.01, 15.95, 15.40, 20.38, 19.52, 17.28, 16.71, 21.21, 20.41,
    18.07, 17.52, 4.34, 4.19, 3.71, 3.60, 10.81, 10.54, 9.34, 9.05,
    19.75, 18.88, 16.72, 15.65, 21.34, 20.11, 17.81, 16.87, 21.88, 21.13,
    18.70, 18.16, 23.69, 22.91, 20.29, 19.70, 24.72, 24.00, 21.25, 20.64,
    2.73, 2.66, 2.36, 2.29, 6.84, 6.70, 5.93, 5.71, 12.42, 11.77,
    10.42, 9.74, 13.28, 12.57, 11.13, 10.65, 13.76, 13.40, 11.87, 11.52,
    14.92, 14.54, 12.88, 12.49, 15.60, 15.25, 13.50, 13.07, 2.75, 2.69,
    2.38, 2.30, 6.91, 6.75, 5.98, 5.71, 12.35, 11.64, 10.31, 9.68,
    13.16, 12.57, 11.13, 10.75, 13.84, 13.54, 11.99, 11.58, 15.02, 14.70,
    13.01, 12.55, 15.73, 15.39, 13.63, 13.09, 2.77, 2.71, 2.40, 2.30,
    6.98, 6.77, 6.00, 5.67, 12.24, 11.54, 10.21, 9.67, 13.09, 12.64,
    11.19, 10.86, 13.98, 13.66, 12.10, 11.59, 15.17, 14.82, 13.12, 12.54,
    15.90, 15.49, 13.72, 13.05, 2.80, 2.72, 2.41, 2.28, 7.04, 6.76,
    5.99, 5.62, 12.12, 11.47, 10.16, 9.72, 13.10, 12.75, 11.29, 10.96,
    14.12, 13.73, 12.16, 11.53, 15.32, 14.87, 13.17, 12.46, 16.05, 15.52,
    13.74, 12.95, 2.83, 2.72, 2.41, 2.26, 7.06, 6.71, 5.95, 5.56,
    12.01, 11.47, 10.15, 9.80, 13.17, 12.89, 11.41, 11.02, 14.24, 13.73,
    12.15, 11.43, 15.44, 14.85, 13.15, 12.34, 16.15, 15.46, 13.69, 12.82,
    2.84, 2.70, 2.39, 2.24, 7.04, 6.65, 5.89, 5.51, 11.95, 11.53,
    10.21, 9.91, 13.30, 13.00, 11.51, 11.03, 14.31, 13.65, 12.09, 11.31,
    15.49, 14.75, 13.06, 12.22, 16.16, 15.33, 13.58, 12.69, 2.83, 2.68,
    2.37, 2.22, 6.99, 6.58, 5.83, 5.49, 11.95, 11.63, 10.30, 10.00,
    13.44, 13.07, 11.57, 10.97, 14.29, 13.53, 11.98, 11.20, 15.46, 14.61,
    12.94, 12.11, 16.09, 15.17, 13.44, 12.61, 2.81, 2.65, 2.35, 2.21,
    6.92, 6.53, 5.78, 5.50, 12.02, 11.75, 10.41, 10.06, 13.55, 13.06,
    11.57, 10.88, 14.21, 13.39, 11.85, 11.14, 15.35, 14.46, 12.80, 12.06,
    15.95, 15.03, 13.31, 12.58, 2.78, 2.63, 2.33, 2.21, 6.85, 6.51,
    5.76, 5.54, 12.13, 11.86, 10.50, 10.06, 13.62, 12.99, 11.51, 10.76,
    14.07, 13.27, 11.75, 11.15, 15.20, 14.34, 12.70, 12.08, 15.79, 14.93,
    13.22, 12.63, 2.76, 2.62, 2.32, 2.22, 6.80, 6.52, 5.78, 5.59,
    12.26, 11.92, 10.56, 10.01, 13.60, 12.88, 11.40, 10.66, 13.93, 13.20,
    11.69, 11.21, 15.05, 14.29, 12.66, 12.16, 15.64, 14.92, 13.21, 12.73,
    2.03, 1.92, 1.70, 1.63, 4.99, 4.79, 4.24, 4.10, 8.99, 8.75,
    7.75, 7.36, 9.99, 9.46, 8.38, 7.83, 10.23, 9.70, 8.59, 8.22,
    11.06, 10.50, 9.29, 8.92, 11.49, 10.95, 9.70, 9.34, 2.68, 2.57,
    2.27, 2.20, 6.64, 6.43, 5.69, 5.53, 12.10, 11.67, 10.33, 9.72,
    13.25, 12.48, 11.05, 10.39, 13.53, 12.93, 11.45, 11.07, 14.62, 14.02,
    12.41, 12.01, 15.23, 14.66, 12.98, 12.59, 3.34, 3.23, 2.86, 2.77,
    8.32, 8.12, 7.19, 6.97, 15.20, 14.52, 12.85, 12.03, 16.41, 15.46,
    13.69, 12.98, 16.83, 16.26, 14.40, 13.98, 18.22, 17.64, 15.62, 15.17,
    19.01, 18.48, 16.36, 15.89, 4.01, 3.91, 3.46, 3.36, 10.06, 9.84,
    8.71, 8.39, 18.23, 17.27, 15.29, 14.30, 19.48, 18.46, 16.34, 15.65,
    20.22, 19.70, 17.44, 16.93, 21.91, 21.38, 18.93, 18.35, 22.92, 22.41,
    19.84, 19.20, 4.71, 4.61, 4.08, 3.94, 11.85, 11.57, 10.24, 9.77,
    21.15, 19.93, 17.65, 16.58, 22.53, 21.54, 19.07, 18.43, 23.73, 23.22,
    20.56, 19.85, 25.75, 25.20, 22.31, 21.50, 26.98, 26.39, 23.37, 22.43,
    2.99, 2.92, 2.59, 2.47, 7.53, 7.29, 6.46, 6.10, 13.17, 12.42,
    10.99, 10.42, 14.10, 13.62, 12.06, 11.70, 15.06, 14.72, 13.04, 12.47,
    16.35, 15.96, 14.13, 13.50, 17.14, 16.69, 14.78, 14.05, 3.02, 2.93,
    2.60, 2.46, 7.58, 7.28, 6.44, 6.04, 13.04, 12.35, 10.94, 10.47,
    14.11, 13.74, 12.17, 11.81, 15.22, 14.79, 13.09, 12.41, 16.51, 16.02,
    14.18, 13.41, 17.30, 16.71, 14.80, 13.94, 3.04, 2.93, 2.59, 2.43,
    7.60, 7.23, 6.40, 5.98, 12.92, 12.35, 10.94, 10.57, 14.20, 13.89,
    12.30, 11.87, 15.35, 14.78, 13.09, 12.30, 16.64, 15.99, 14.16, 13.28,
    17.39, 16.64, 14.73, 13.79, 3.05, 2.91, 2.58, 2.41, 7.58, 7.15,
    6.33, 5.93, 12.86, 12.42, 11.00, 10.68, 14.33, 14.01, 12.40, 11.87,
    15.41, 14.69, 13.01, 12.17, 16.69, 15.88, 14.06, 13.15, 17.40, 16.50,
    14.61, 13.66, 3.05, 2.88, 2.55, 2.39, 7.52, 7.08, 6.27, 5.91,
    12.87, 12.54, 11.10, 10.77, 14.48, 14.07, 12.46, 11.81, 15.39, 14.56,
    12.89, 12.06, 16.64, 15.72, 13.92, 13.04, 17.32, 16.33, 14.46, 13.57,
    3.03, 2.85, 2.52, 2.38, 7.44, 7.03, 6.22, 5.93, 12.95, 12.67,
    11.22, 10.83, 14.60, 14.07, 12.45, 11.70, 15.29, 14.40, 12.75, 12.00,
    16.52, 15.56, 13.78, 12.99, 17.17, 16.17, 14.32, 13.55, 3.00, 2.83,
    2.50, 2.38, 7.37, 7.01, 6.21, 5.97, 13.07, 12.78, 11.32, 10.83,
    14.66, 13.99, 12.38, 11.58, 15.14, 14.28, 12.64, 12.01, 16.36, 15.44,
    13.67, 13.01, 16.99, 16.08, 14.23, 13.61, 2.97, 2.82, 2.49, 2.40,
    7.32, 7.03, 6.22, 6.03, 13.21, 12.84, 11.37, 10.78, 14.65, 13.86,
    12.27, 11.48, 14.99, 14.22, 12.59, 12.08, 16.19, 15.39, 13.63, 13.10,
    16.83, 16.06, 14.22, 13.72, 2.94, 2.82, 2.50, 2.42, 7.30, 7.08,
    6.27, 6.09, 13.32, 12.83, 11.36, 10.68, 14.55, 13.71, 12.14, 11.42,
    14.86, 14.23, 12.60, 12.19, 16.07, 15.43, 13.66, 13.23, 16.74, 16.14,
    14.29, 13.87, 2.93, 2.84, 2.52, 2.45, 7.33, 7.15, 6.33, 6.14,
    13.38, 12.76, 11.30, 10.57, 14.42, 13.59, 12.04, 11.43, 14.81, 14.33,
    12.68, 12.32, 16.03, 15.54, 13.76, 13.37, 16.74, 16.28, 14.42, 14.00,
    2.14, 2.08, 1.84, 1.79, 5.35, 5.22, 4.62, 4.48, 9.77, 9.33,
    8.26, 7.73, 10.54, 9.93, 8.80, 8.34, 10.82, 10.46, 9.26, 8.99,
    11.71, 11.35, 10.05, 9.76, 12.23, 11.89, 10.53, 10.22, 2.87, 2.80,
    2.47, 2.40, 7.19, 7.03, 6.23, 5.99, 13.02, 12.32, 10.91, 10.21,
    13.91, 13.18, 11.67, 11.19, 14.45, 14.08, 12.47, 12.10, 15.66, 15.28,
    13.53, 13.12, 16.38, 16.02, 14.18, 13.72, 3.61, 3.53, 3.13, 3.01,
    9.08, 8.86, 7.84, 7.48, 16.18, 15.24, 13.50, 12.69, 17.23, 16.49,
    14.60, 14.11, 18.18, 17.78, 15.75, 15.19, 19.72, 19.30, 17.09, 16.46,
    20.66, 20.21, 17.89, 17.17, 4.37, 4.27, 3.78, 3.61, 11.00, 10.66,
    9.44, 8.91, 19.23, 18.13, 16.05, 15.23, 20.59, 19.91, 17.62, 17.11,
    22.03, 21.52, 19.05, 18.22, 23.90, 23.33, 20.66, 19.71, 25.06, 24.39,
    21.60, 20.52, 5.15, 5.00, 4.43, 4.18, 12.92, 12.40, 10.98, 10.29,
    22.21, 21.05, 18.64, 17.86, 24.06, 23.44, 20.76, 20.14, 25.96, 25.21,
    22.32, 21.14, 28.17, 27.31, 24.18, 22.85, 29.50, 28.48, 25.22, 23.74,
    3.26, 3.14, 2.78, 2.60, 8.14, 7.74, 6.85, 6.40, 13.84, 13.24,
    11.72, 11.33, 15.22, 14.89, 13.18, 12.72, 16.45, 15.83, 14.02, 13.16,
    17.83, 17.12, 15.16, 14.22, 18.64, 17.82, 15.78, 14.77, 3.27, 3.11,
    2.76, 2.58, 8.11, 7.66, 6.78, 6.36, 13.78, 13.32, 11.79, 11.45,
    15.37, 15.02, 13.30, 12.72, 16.51, 15.73, 13.93, 13.03, 17.88, 17.00,
    15.05, 14.07, 18.64, 17.67, 15.64, 14.63, 3.26, 3.08, 2.73, 2.56,
    8.05, 7.58, 6.71, 6.34, 13.80, 13.44, 11.90, 11.55, 15.53, 15.08,
    13.35, 12.65, 16.48, 15.58, 13.80, 12.91, 17.83, 16.83, 14.90, 13.96,
    18.55, 17.48, 15.48, 14.54, 3.24, 3.05, 2.70, 2.55, 7.97, 7.53,
    6.66, 6.35, 13.88, 13.58, 12.03, 11.61, 15.66, 15.07, 13.34, 12.53,
    16.37, 15.42, 13.65, 12.85, 17.69, 16.66, 14.75, 13.91, 18.38, 17.32,
    15.33, 14.52, 3.21, 3.03, 2.68, 2.55, 7.89, 7.51, 6.65, 6.40,
    14.02, 13.70, 12.13, 11.60, 15.71, 14.98, 13.26, 12.40, 16.21, 15.29,
    13.54, 12.87, 17.51, 16.54, 14.64, 13.94, 18.19, 17.22, 15.25, 14.59,
    3.18, 3.02, 2.67, 2.57, 7.84, 7.53, 6.67, 6.46, 14.17, 13.76,
    12.18, 11.54, 15.69, 14.83, 13.13, 12.29, 16.05, 15.23, 13.49, 12.95,
    17.34, 16.49, 14.60, 14.04, 18.02, 17.22, 15.24, 14.72, 3.15, 3.03,
    2.68, 2.60, 7.82, 7.59, 6.72, 6.53, 14.28, 13.75, 12.17, 11.43,
    15.58, 14.68, 13.00, 12.23, 15.92, 15.26, 13.51, 13.07, 17.22, 16.54,
    14.64, 14.19, 17.93, 17.30, 15.32, 14.87, 3.14, 3.05, 2.70, 2.62,
    7.85, 7.67, 6.79, 6.58, 14.34, 13.67, 12.10, 11.32, 15.43, 14.56,
    12.89, 12.24, 15.87, 15.36, 13.60, 13.21, 17.18, 16.66, 14.75, 14.33,
    17.94, 17.46, 15.46, 15.01, 3.15, 3.08, 2.73, 2.64, 7.92, 7.75,
    6.86, 6.59, 14.31, 13.54, 11.99, 11.22, 15.27, 14.50, 12.84, 12.32,
    15.90, 15.51, 13.73, 13.32, 17.24, 16.83, 14.91, 14.44, 18.04, 17.65,
    15.62, 15.10, 3.18, 3.11, 2.75, 2.65, 8.00, 7.80, 6.91, 6.58,
    14.22, 13.40, 11.86, 11.16, 15.15, 14.52, 12.86, 12.44, 16.01, 15.67,
    13.88, 13.37, 17.38, 17.00, 15.06, 14.48, 18.21, 17.80, 15.76, 15.10,
    2.31, 2.26, 2.00, 1.93, 5.81, 5.67, 5.02, 4.78, 10.35, 9.75,
    8.63, 8.12, 11.02, 10.56, 9.35, 9.04, 11.64, 11.39, 10.08, 9.72,
    12.63, 12.36, 10.94, 10.53, 13.23, 12.94, 11.46, 10.99, 3.11, 3.04,
    2.69, 2.57, 7.83, 7.58, 6.71, 6.33, 13.67, 12.89, 11.41, 10.83,
    14.64, 14.16, 12.54, 12.18, 15.68, 15.31, 13.56, 12.95, 17.01, 16.60,
    14.70, 14.01, 17.83, 17.35, 15.36, 14.58, 3.93, 3.81, 3.37, 3.19,
    9.85, 9.44, 8.36, 7.84, 16.91, 16.03, 14.20, 13.61, 18.34, 17.88,
    15.83, 15.36, 19.80, 19.21, 17.01, 16.10, 21.48, 20.80, 18.42, 17.39,
    22.49, 21.69, 19.21, 18.07, 4.75, 4.56, 4.04, 3.79, 11.84, 11.25,
    9.96, 9.31, 20.12, 19.26, 17.05, 16.49, 22.15, 21.68, 19.19, 18.51,
    23.94, 23.02, 20.38, 19.13, 25.95, 24.90, 22.04, 20.67, 27.12, 25.90,
    22.94, 21.46, 5.55, 5.28, 4.68, 4.37, 13.76, 12.99, 11.50, 10.78,
    23.38, 22.61, 20.02, 19.44, 26.10, 25.50, 22.58, 21.58, 28.02, 26.68,
    23.62, 22.09, 30.34, 28.83, 25.53, 23.87, 31.63, 29.95, 26.52, 24.80,
    3.48, 3.29, 2.91, 2.73, 8.58, 8.08, 7.16, 6.76, 14.72, 14.35,
    12.71, 12.33, 16.58, 16.09, 14.25, 13.48, 17.57, 16.61, 14.71, 13.77,
    19.01, 17.94, 15.89, 14.89, 19.77, 18.63, 16.50, 15.50, 3.45, 3.25,
    2.88, 2.72, 8.49, 8.03, 7.11, 6.78, 14.82, 14.50, 12.84, 12.38,
    16.71, 16.07, 14.23, 13.36, 17.45, 16.44, 14.55, 13.71, 18.86, 17.76,
    15.73, 14.84, 19.59, 18.46, 16.35, 15.49, 3.42, 3.23, 2.86, 2.72,
    8.41, 8.01, 7.09, 6.83, 14.97, 14.62, 12.95, 12.37, 16.76, 15.96,
    14.13, 13.22, 17.28, 16.30, 14.44, 13.73, 18.67, 17.63, 15.61, 14.88,
    19.39, 18.36, 16.26, 15.57, 3.39, 3.22, 2.85, 2.74, 8.36, 8.04,
    7.12, 6.90, 15.12, 14.68, 13.00, 12.30, 16.73, 15.81, 14.00, 13.10,
    17.10, 16.25, 14.38, 13.82, 18.48, 17.59, 15.57, 14.99, 19.22, 18.37,
    16.26, 15.71, 3.36, 3.23, 2.86, 2.77, 8.35, 8.10, 7.18, 6.97,
    15.24, 14.66, 12.98, 12.19, 16.61, 15.65, 13.85, 13.05, 16.97, 16.28,
    14.41, 13.95, 18.36, 17.65, 15.63, 15.14, 19.12, 18.47, 16.35, 15.87,
    3.35, 3.25, 2.88, 2.80, 8.38, 8.19, 7.25, 7.02, 15.29, 14.57,
    12.90, 12.06, 16.45, 15.52, 13.74, 13.06, 16.92, 16.39, 14.52, 14.10,
    18.32, 17.79, 15.75, 15.30, 19.14, 18.64, 16.50, 16.02, 3.37, 3.29,
    2.91, 2.82, 8.45, 8.27, 7.32, 7.03, 15.26, 14.43, 12.77, 11.96,
    16.28, 15.46, 13.69, 13.15, 16.97, 16.56, 14.66, 14.21, 18.40, 17.97,
    15.91, 15.41, 19.25, 18.84, 16.68, 16.11, 3.39, 3.32, 2.94, 2.83,
    8.54, 8.32, 7.37, 7.01, 15.16, 14.28, 12.64, 11.91, 16.15, 15.49,
    13.72, 13.28, 17.09, 16.73, 14.81, 14.27, 18.55, 18.15, 16.07, 15.45,
    19.44, 19.00, 16.82, 16.11, 3.43, 3.34, 2.96, 2.82, 8.62, 8.34,
    7.38, 6.96, 15.01, 14.16, 12.54, 11.92, 16.11, 15.60, 13.81, 13.42,
    17.27, 16.86, 14.93, 14.24, 18.74, 18.27, 16.18, 15.40, 19.64, 19.09,
    16.91, 16.02, 3.46, 3.35, 2.97, 2.80, 8.67, 8.30, 7.35, 6.89,
    14.86, 14.11, 12.49, 12.00, 16.15, 15.76, 13.95, 13.53, 17.44, 16.91,
    14.97, 14.15, 18.92, 18.31, 16.21, 15.29, 19.81, 19.08, 16.90, 15.88,
];
