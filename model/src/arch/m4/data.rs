//! Single-core FP32 GEMM throughput grid for Apple M4 (performance core).

/// Tabulated M extents.
pub(super) static M_VALUES: [i64; 48] = [1, 15, 16, 17, 31, 32, 33, 47, 48, 49, 63, 64, 65, 79, 80, 81, 95, 96, 97, 111, 112, 113, 127, 128, 129, 143, 144, 145, 159, 160, 161, 175, 176, 177, 191, 192, 193, 207, 208, 209, 223, 224, 225, 239, 240, 241, 255, 256];
/// Tabulated N extents.
pub(super) static N_VALUES: [i64; 48] = [1, 15, 16, 17, 31, 32, 33, 47, 48, 49, 63, 64, 65, 79, 80, 81, 95, 96, 97, 111, 112, 113, 127, 128, 129, 143, 144, 145, 159, 160, 161, 175, 176, 177, 191, 192, 193, 207, 208, 209, 223, 224, 225, 239, 240, 241, 255, 256];
/// Tabulated K extents.
pub(super) static K_VALUES: [i64; 6] = [4, 16, 48, 128, 256, 512];

/// Flattened `[m][n][k][trans_b]` GFLOPS grid.
#[rustfmt::skip]
pub(super) static GFLOPS: [f64; 27648] = [
    2.35, 2.18, 5.14, 4.73, 7.18, 6.63, 8.45, 7.83, 8.87, 8.21,
    9.09, 8.40, 6.65, 6.14, 14.50, 13.34, 20.23, 18.74, 23.86, 22.07,
    25.05, 23.14, 25.67, 23.67, 6.85, 6.30, 14.88, 13.70, 20.88, 19.54,
    24.62, 22.64, 25.81, 23.73, 26.40, 24.28, 5.39, 4.97, 11.71, 10.87,
    16.67, 15.68, 19.35, 17.84, 20.29, 18.72, 20.75, 19.20, 7.06, 6.53,
    15.37, 14.30, 21.95, 20.64, 25.38, 23.44, 26.60, 24.60, 27.22, 25.23,
    7.13, 6.66, 15.61, 14.66, 22.54, 21.10, 25.62, 23.90, 26.88, 25.11,
    27.57, 25.81, 6.16, 5.79, 13.56, 12.75, 19.53, 18.10, 22.11, 20.78,
    23.23, 21.84, 23.87, 22.46, 7.25, 6.82, 15.96, 14.99, 22.95, 21.23,
    26.01, 24.46, 27.33, 25.71, 28.10, 26.43, 7.40, 6.94, 16.28, 15.18,
    23.08, 21.22, 26.55, 24.91, 27.90, 26.16, 28.69, 26.84, 6.68, 6.20,
    14.61, 13.49, 20.45, 18.86, 23.97, 22.29, 25.17, 23.38, 25.83, 23.93,
    7.49, 6.95, 16.37, 15.09, 22.89, 21.13, 26.89, 24.95, 28.24, 26.17,
    28.96, 26.78, 7.53, 6.93, 16.37, 15.05, 22.90, 21.36, 27.06, 24.91,
    28.37, 26.11, 29.04, 26.70, 6.83, 6.29, 14.84, 13.73, 21.03, 19.76,
    24.56, 22.60, 25.74, 23.71, 26.33, 24.29, 7.45, 6.87, 16.19, 15.01,
    23.01, 21.64, 26.78, 24.67, 28.07, 25.88, 28.71, 26.53, 7.43, 6.92,
    16.23, 15.20, 23.38, 21.94, 26.70, 24.82, 28.01, 26.07, 28.70, 26.78,
    6.91, 6.49, 15.19, 14.29, 21.93, 20.39, 24.81, 23.28, 26.06, 24.47,
    26.76, 25.16, 7.44, 6.99, 16.36, 15.39, 23.59, 21.90, 26.69, 25.07,
    28.04, 26.36, 28.82, 27.10, 7.55, 7.09, 16.61, 15.54, 23.68, 21.80,
    27.07, 25.44, 28.45, 26.73, 29.26, 27.44, 7.16, 6.68, 15.70, 14.54,
    22.05, 20.29, 25.70, 23.97, 27.00, 25.15, 27.72, 25.76, 7.62, 7.09,
    16.69, 15.43, 23.39, 21.55, 27.35, 25.47, 28.73, 26.71, 29.49, 27.35,
    7.66, 7.06, 16.67, 15.33, 23.28, 21.64, 27.51, 25.37, 28.86, 26.60,
    29.55, 27.20, 7.20, 6.62, 15.63, 14.42, 22.03, 20.67, 25.88, 23.79,
    27.12, 24.95, 27.74, 25.54, 7.58, 6.97, 16.45, 15.20, 23.25, 21.84,
    27.23, 25.04, 28.54, 26.26, 29.19, 26.90, 7.53, 6.98, 16.41, 15.32,
    23.55, 22.13, 27.05, 25.06, 28.36, 26.31, 29.04, 27.01, 7.15, 6.70,
    15.69, 14.75, 22.67, 21.15, 25.68, 24.03, 26.96, 25.26, 27.67, 25.97,
    7.50, 7.03, 16.47, 15.49, 23.78, 22.15, 26.92, 25.23, 28.26, 26.52,
    29.02, 27.27, 7.58, 7.13, 16.69, 15.65, 23.90, 22.05, 27.19, 25.58,
    28.57, 26.88, 29.39, 27.61, 7.34, 6.86, 16.12, 14.97, 22.73, 20.90,
    26.32, 24.63, 27.66, 25.85, 28.42, 26.50, 7.66, 7.15, 16.81, 15.59,
    23.65, 21.76, 27.49, 25.68, 28.88, 26.95, 29.67, 27.61, 7.71, 7.13,
    16.82, 15.48, 23.48, 21.75, 27.69, 25.61, 29.07, 26.85, 29.79, 27.47,
    7.38, 6.78, 16.02, 14.75, 22.49, 21.04, 26.51, 24.38, 27.80, 25.55,
    28.43, 26.15, 7.65, 7.03, 16.60, 15.31, 23.36, 21.89, 27.48, 25.27,
    28.81, 26.49, 29.47, 27.11, 7.59, 7.01, 16.51, 15.36, 23.58, 22.18,
    27.27, 25.18, 28.58, 26.43, 29.25, 27.11, 7.28, 6.79, 15.93, 14.95,
    22.99, 21.52, 26.13, 24.38, 27.42, 25.61, 28.12, 26.33, 7.53, 7.04,
    16.50, 15.51, 23.84, 22.27, 27.04, 25.27, 28.38, 26.56, 29.12, 27.30,
    7.59, 7.14, 16.70, 15.69, 24.01, 22.21, 27.21, 25.60, 28.60, 26.90,
    29.40, 27.66, 7.42, 6.95, 16.31, 15.21, 23.13, 21.27, 26.60, 24.96,
    27.96, 26.21, 28.75, 26.89, 7.67, 7.18, 16.86, 15.68, 23.83, 21.91,
    27.51, 25.78, 28.92, 27.06, 29.72, 27.75, 7.74, 7.17, 16.91, 15.59,
    23.63, 21.82, 27.77, 25.77, 29.16, 27.02, 29.91, 27.65, 7.49, 6.89,
    16.27, 14.96, 22.76, 21.23, 26.89, 24.76, 28.20, 25.95, 28.86, 26.54,
    7.70, 7.08, 16.72, 15.39, 23.43, 21.90, 27.66, 25.44, 29.00, 26.67,
    29.67, 27.28, 7.64, 7.04, 16.59, 15.38, 23.57, 22.17, 27.44, 25.28,
    28.76, 26.52, 29.42, 27.18, 7.36, 6.85, 16.07, 15.05, 23.15, 21.72,
    26.43, 24.57, 27.73, 25.81, 28.41, 26.52, 7.56, 7.05, 16.52, 15.50,
    23.83, 22.33, 27.14, 25.28, 28.47, 26.56, 29.19, 27.29, 7.59, 7.13,
    16.68, 15.69, 24.05, 22.32, 27.22, 25.57, 28.59, 26.87, 29.38, 27.63,
    7.45, 7.00, 16.41, 15.35, 23.39, 21.53, 26.74, 25.13, 28.10, 26.40,
    28.90, 27.11, 7.66, 7.19, 16.86, 15.74, 23.96, 22.04, 27.49, 25.81,
    28.89, 27.11, 29.71, 27.82, 7.74, 7.20, 16.96, 15.67, 23.77, 21.89,
    27.79, 25.87, 29.19, 27.14, 29.96, 27.79, 7.29, 6.83, 16.02, 14.92,
    22.67, 20.85, 26.14, 24.50, 27.47, 25.73, 28.24, 26.39, 20.62, 19.29,
    45.30, 42.09, 63.92, 58.77, 73.97, 69.24, 77.74, 72.68, 79.89, 74.51,
    21.49, 19.90, 46.93, 43.23, 65.55, 60.59, 77.15, 71.50, 80.99, 74.97,
    83.05, 76.70, 17.01, 15.64, 36.96, 33.99, 51.75, 48.32, 61.10, 56.22,
    64.08, 58.93, 65.56, 60.28, 22.31, 20.52, 48.46, 44.61, 67.99, 63.61,
    80.17, 73.72, 84.06, 77.28, 85.99, 79.07, 22.44, 20.71, 48.78, 45.29,
    69.45, 65.33, 80.65, 74.36, 84.54, 78.02, 86.48, 79.99, 19.18, 17.87,
    41.91, 39.29, 60.42, 56.65, 68.87, 64.10, 72.26, 67.34, 74.06, 69.20,
    22.51, 21.02, 49.27, 46.25, 71.12, 66.57, 80.85, 75.40, 84.84, 79.22,
    87.00, 81.43, 22.82, 21.45, 50.19, 47.20, 72.32, 67.04, 81.86, 76.94,
    86.00, 80.87, 88.39, 83.15, 20.63, 19.37, 45.40, 42.41, 64.58, 59.42,
    73.99, 69.51, 77.77, 73.01, 79.98, 74.95, 23.17, 21.73, 50.98, 47.53,
    72.30, 66.48, 83.12, 78.00, 87.37, 81.91, 89.83, 84.04, 23.54, 21.87,
    51.51, 47.56, 72.11, 66.48, 84.47, 78.55, 88.72, 82.39, 91.05, 84.34,
    21.55, 19.85, 46.89, 43.11, 65.51, 60.96, 77.42, 71.35, 81.21, 74.79,
    83.15, 76.48, 23.52, 21.65, 51.14, 47.02, 71.53, 66.69, 84.50, 77.80,
    88.63, 81.54, 90.70, 83.40, 23.44, 21.58, 50.91, 47.10, 72.10, 67.76,
    84.25, 77.53, 88.30, 81.31, 90.31, 83.30, 21.60, 20.05, 47.10, 44.03,
    67.68, 63.59, 77.58, 71.96, 81.36, 75.56, 83.33, 77.60, 23.19, 21.57,
    50.64, 47.41, 72.91, 68.43, 83.29, 77.41, 87.37, 81.31, 89.52, 83.53,
    23.30, 21.87, 51.19, 48.15, 73.91, 68.74, 83.61, 78.44, 87.82, 82.45,
    90.20, 84.79, 22.08, 20.76, 48.62, 45.55, 69.51, 64.07, 79.20, 74.49,
    83.24, 78.27, 85.61, 80.40, 23.52, 22.10, 51.78, 48.43, 73.82, 67.96,
    84.36, 79.30, 88.67, 83.31, 91.19, 85.54, 23.85, 22.23, 52.29, 48.43,
    73.46, 67.60, 85.57, 79.84, 89.90, 83.78, 92.33, 85.82, 22.66, 20.92,
    49.37, 45.41, 68.92, 63.91, 81.35, 75.16, 85.37, 78.79, 87.47, 80.59,
    23.87, 22.01, 51.97, 47.78, 72.57, 67.43, 85.74, 79.09, 89.95, 82.91,
    92.12, 84.79, 23.78, 21.87, 51.62, 47.63, 72.74, 68.24, 85.45, 78.56,
    89.57, 82.37, 91.60, 84.32, 22.43, 20.76, 48.83, 45.49, 69.87, 65.72,
    80.60, 74.51, 84.50, 78.22, 86.48, 80.26, 23.46, 21.75, 51.13, 47.73,
    73.35, 68.96, 84.30, 78.08, 88.40, 81.98, 90.51, 84.16, 23.46, 21.97,
    51.45, 48.37, 74.33, 69.37, 84.22, 78.80, 88.42, 82.82, 90.74, 85.16,
    22.61, 21.27, 49.77, 46.74, 71.46, 66.04, 81.09, 76.28, 85.22, 80.17,
    87.62, 82.40, 23.61, 22.21, 52.00, 48.77, 74.48, 68.71, 84.70, 79.68,
    89.02, 83.73, 91.54, 86.03, 23.93, 22.38, 52.57, 48.84, 74.18, 68.20,
    85.84, 80.35, 90.21, 84.34, 92.71, 86.47, 23.14, 21.43, 50.54, 46.55,
    70.59, 65.25, 83.08, 77.00, 87.22, 80.73, 89.44, 82.60, 24.03, 22.22,
    52.42, 48.24, 73.18, 67.77, 86.29, 79.83, 90.57, 83.69, 92.83, 85.60,
    23.97, 22.04, 52.06, 47.93, 73.05, 68.34, 86.14, 79.21, 90.31, 83.03,
    92.38, 84.95, 22.89, 21.12, 49.76, 46.19, 70.84, 66.64, 82.26, 75.85,
    86.23, 79.58, 88.21, 81.59, 23.65, 21.85, 51.44, 47.85, 73.46, 69.10,
    84.98, 78.46, 89.08, 82.35, 91.15, 84.47, 23.56, 21.99, 51.55, 48.39,
    74.41, 69.66, 84.59, 78.89, 88.77, 82.89, 91.03, 85.21, 22.86, 21.50,
    50.30, 47.30, 72.46, 67.17, 82.03, 77.09, 86.18, 81.03, 88.57, 83.32,
    23.63, 22.23, 52.02, 48.88, 74.81, 69.22, 84.78, 79.74, 89.09, 83.81,
    91.59, 86.16, 23.93, 22.44, 52.64, 49.08, 74.66, 68.65, 85.84, 80.55,
    90.22, 84.59, 92.76, 86.79, 23.40, 21.74, 51.20, 47.27, 71.67, 66.08,
    83.97, 78.08, 88.19, 81.90, 90.50, 83.83, 24.11, 22.36, 52.69, 48.58,
    73.66, 68.00, 86.53, 80.31, 90.86, 84.22, 93.20, 86.18, 24.10, 22.18,
    52.40, 48.18, 73.29, 68.34, 86.59, 79.71, 90.81, 83.56, 92.94, 85.46,
    23.21, 21.37, 50.40, 46.63, 71.38, 67.08, 83.40, 76.75, 87.42, 80.50,
    89.40, 82.46, 23.80, 21.94, 51.71, 47.93, 73.45, 69.08, 85.52, 78.78,
    89.65, 82.65, 91.69, 84.70, 23.64, 21.99, 51.63, 48.34, 74.34, 69.76,
    84.92, 78.92, 89.08, 82.90, 91.27, 85.17, 23.02, 21.60, 50.56, 47.57,
    73.01, 67.90, 82.60, 77.49, 86.75, 81.45, 89.10, 83.76, 23.63, 22.21,
    51.97, 48.88, 74.95, 69.57, 84.80, 79.65, 89.08, 83.72, 91.54, 86.10,
    23.90, 22.46, 52.61, 49.21, 74.99, 69.04, 85.71, 80.57, 90.09, 84.64,
    92.65, 86.91, 7.59, 7.08, 16.65, 15.43, 23.42, 21.54, 27.22, 25.43,
    28.60, 26.69, 29.38, 27.34, 21.46, 19.99, 47.04, 43.53, 66.02, 60.77,
    77.00, 71.80, 80.89, 75.33, 83.07, 77.15, 22.29, 20.56, 48.55, 44.64,
    67.77, 62.89, 80.03, 73.90, 83.97, 77.46, 86.02, 79.22, 17.58, 16.16,
    38.16, 35.18, 53.69, 50.32, 63.17, 58.07, 66.22, 60.88, 67.73, 62.31,
    23.05, 21.20, 50.05, 46.20, 70.60, 66.25, 82.84, 76.17, 86.84, 79.87,
    88.81, 81.77, 23.19, 21.47, 50.50, 47.08, 72.33, 68.02, 83.32, 77.08,
    87.36, 80.92, 89.42, 83.04, 19.88, 18.59, 43.56, 40.93, 62.92, 58.79,
    71.36, 66.70, 74.91, 70.09, 76.86, 72.07, 23.36, 21.88, 51.24, 48.18,
    74.03, 69.04, 83.83, 78.49, 88.02, 82.49, 90.35, 84.83, 23.75, 22.34,
    52.30, 49.08, 75.02, 69.28, 85.19, 80.15, 89.54, 84.23, 92.07, 86.57,
    21.49, 20.12, 47.23, 43.94, 66.77, 61.38, 77.08, 72.22, 81.01, 75.83,
    83.27, 77.76, 24.14, 22.56, 53.00, 49.20, 74.71, 68.69, 86.58, 80.99,
    90.98, 85.00, 93.49, 87.13, 24.44, 22.62, 53.34, 49.12, 74.49, 68.90,
    87.74, 81.26, 92.10, 85.20, 94.43, 87.16, 22.30, 20.50, 48.44, 44.57,
    67.88, 63.43, 80.11, 73.68, 84.00, 77.24, 85.94, 79.01, 24.32, 22.36,
    52.81, 48.64, 74.16, 69.43, 87.39, 80.35, 91.62, 84.23, 93.72, 86.18,
    24.21, 22.35, 52.64, 48.91, 75.03, 70.58, 87.00, 80.26, 91.20, 84.22,
    93.31, 86.36, 22.36, 20.84, 48.89, 45.85, 70.52, 66.08, 80.29, 74.79,
    84.24, 78.57, 86.36, 80.75, 24.02, 22.44, 52.60, 49.39, 75.95, 71.05,
    86.26, 80.51, 90.53, 84.60, 92.85, 86.97, 24.23, 22.79, 53.32, 50.13,
    76.77, 71.11, 86.93, 81.73, 91.34, 85.90, 93.88, 88.32, 23.01, 21.59,
    50.62, 47.25, 71.93, 66.16, 82.51, 77.49, 86.73, 81.38, 89.18, 83.52,
    24.51, 22.97, 53.89, 50.20, 76.34, 70.19, 87.89, 82.44, 92.38, 86.56,
    94.97, 88.80, 24.79, 23.02, 54.23, 50.04, 75.87, 69.98, 88.98, 82.68,
    93.44, 86.72, 95.88, 88.76, 23.46, 21.60, 51.03, 46.92, 71.32, 66.42,
    84.28, 77.64, 88.40, 81.38, 90.49, 83.23, 24.71, 22.73, 53.69, 49.38,
    75.15, 70.13, 88.76, 81.68, 93.08, 85.62, 95.25, 87.57, 24.56, 22.62,
    53.34, 49.38, 75.62, 71.09, 88.25, 81.24, 92.50, 85.22, 94.61, 87.31,
    23.20, 21.55, 50.62, 47.34, 72.79, 68.36, 83.33, 77.34, 87.39, 81.23,
    89.52, 83.43, 24.28, 22.60, 53.04, 49.70, 76.42, 71.69, 87.20, 81.11,
    91.48, 85.20, 93.75, 87.54, 24.37, 22.89, 53.56, 50.38, 77.30, 71.84,
    87.45, 82.08, 91.85, 86.28, 94.36, 88.73, 23.55, 22.14, 51.85, 48.54,
    74.04, 68.21, 84.46, 79.42, 88.77, 83.44, 91.29, 85.70, 24.60, 23.11,
    54.15, 50.62, 77.11, 70.97, 88.23, 82.92, 92.74, 87.10, 95.37, 89.42,
    24.90, 23.20, 54.58, 50.51, 76.61, 70.52, 89.36, 83.32, 93.87, 87.41,
    96.40, 89.53, 24.00, 22.14, 52.28, 48.08, 72.98, 67.73, 86.18, 79.57,
    90.43, 83.42, 92.64, 85.31, 24.90, 22.95, 54.19, 49.83, 75.69, 70.39,
    89.44, 82.47, 93.83, 86.44, 96.08, 88.40, 24.77, 22.78, 53.77, 49.64,
    75.85, 71.19, 89.00, 81.84, 93.30, 85.82, 95.41, 87.86, 23.65, 21.90,
    51.51, 48.03, 73.78, 69.38, 84.99, 78.62, 89.11, 82.54, 91.21, 84.71,
    24.44, 22.68, 53.29, 49.78, 76.52, 71.91, 87.82, 81.40, 92.09, 85.47,
    94.30, 87.76, 24.44, 22.90, 53.61, 50.42, 77.46, 72.24, 87.72, 82.13,
    92.10, 86.32, 94.54, 88.76, 23.80, 22.39, 52.40, 49.18, 75.17, 69.42,
    85.37, 80.31, 89.72, 84.40, 92.26, 86.74, 24.61, 23.15, 54.20, 50.80,
    77.55, 71.51, 88.28, 83.04, 92.78, 87.26, 95.42, 89.65, 24.92, 23.29,
    54.73, 50.81, 77.14, 70.93, 89.41, 83.63, 93.95, 87.78, 96.55, 89.97,
    24.29, 22.48, 53.02, 48.82, 74.04, 68.49, 87.21, 80.77, 91.55, 84.69,
    93.86, 86.63, 25.01, 23.11, 54.53, 50.17, 76.12, 70.54, 89.81, 83.03,
    94.26, 87.04, 96.59, 89.03, 24.92, 22.91, 54.11, 49.84, 76.00, 71.14,
    89.54, 82.33, 93.88, 86.31, 96.03, 88.31, 23.97, 22.13, 52.11, 48.42,
    74.28, 69.88, 86.13, 79.46, 90.29, 83.38, 92.37, 85.50, 24.58, 22.73,
    53.50, 49.81, 76.48, 71.94, 88.34, 81.62, 92.61, 85.67, 94.77, 87.89,
    24.49, 22.88, 53.63, 50.36, 77.43, 72.44, 87.95, 82.08, 92.30, 86.25,
    94.66, 88.67, 23.94, 22.51, 52.67, 49.51, 75.83, 70.24, 85.87, 80.73,
    90.23, 84.86, 92.74, 87.25, 24.59, 23.14, 54.14, 50.86, 77.80, 71.93,
    88.22, 82.98, 92.71, 87.22, 95.32, 89.66, 24.90, 23.34, 54.75, 51.01,
    77.55, 71.31, 89.30, 83.75, 93.86, 87.95, 96.49, 90.22, 6.24, 5.80,
    13.67, 12.62, 19.14, 17.64, 22.41, 20.85, 23.54, 21.87, 24.16, 22.39,
    17.65, 16.37, 38.59, 35.59, 53.96, 49.80, 63.35, 58.82, 66.52, 61.69,
    68.24, 63.13, 18.26, 16.81, 39.70, 36.50, 55.51, 51.73, 65.59, 60.40,
    68.79, 63.31, 70.41, 64.74, 14.37, 13.22, 31.20, 28.85, 44.15, 41.49,
    51.63, 47.51, 54.12, 49.82, 55.35, 51.03, 18.84, 17.36, 40.93, 37.92,
    58.09, 54.62, 67.70, 62.35, 70.96, 65.40, 72.58, 67.02, 18.98, 17.65,
    41.43, 38.78, 59.63, 55.98, 68.18, 63.33, 71.51, 66.51, 73.26, 68.33,
    16.33, 15.33, 35.87, 33.74, 51.80, 48.20, 58.61, 54.97, 61.55, 57.78,
    63.22, 59.42, 19.20, 18.04, 42.21, 39.71, 60.91, 56.56, 68.90, 64.70,
    72.38, 68.01, 74.36, 69.94, 19.58, 18.40, 43.11, 40.33, 61.49, 56.63,
    70.22, 66.02, 73.81, 69.36, 75.91, 71.23, 17.70, 16.51, 38.83, 35.97,
    54.57, 50.21, 63.51, 59.29, 66.73, 62.21, 68.54, 63.74, 19.87, 18.50,
    43.53, 40.26, 61.05, 56.22, 71.30, 66.43, 74.90, 69.69, 76.90, 71.37,
    20.05, 18.49, 43.66, 40.14, 60.95, 56.61, 72.00, 66.44, 75.54, 69.65,
    77.37, 71.23, 18.23, 16.76, 39.58, 36.51, 55.74, 52.27, 65.52, 60.24,
    68.68, 63.16, 70.24, 64.64, 19.88, 18.29, 43.16, 39.87, 60.95, 57.23,
    71.45, 65.71, 74.89, 68.90, 76.59, 70.55, 19.80, 18.35, 43.14, 40.25,
    61.84, 58.14, 71.14, 65.85, 74.59, 69.14, 76.36, 70.97, 18.34, 17.17,
    40.22, 37.80, 58.10, 54.25, 65.85, 61.59, 69.13, 64.73, 70.94, 66.56,
    19.73, 18.49, 43.30, 40.72, 62.55, 58.29, 70.80, 66.33, 74.34, 69.72,
    76.33, 71.69, 19.96, 18.78, 43.96, 41.24, 63.00, 58.15, 71.61, 67.36,
    75.26, 70.79, 77.39, 72.75, 18.96, 17.74, 41.66, 38.73, 58.83, 54.09,
    68.02, 63.69, 71.48, 66.86, 73.47, 68.55, 20.19, 18.86, 44.32, 41.12,
    62.41, 57.40, 72.44, 67.71, 76.12, 71.07, 78.20, 72.83, 20.37, 18.83,
    44.43, 40.89, 62.03, 57.42, 73.11, 67.67, 76.74, 70.94, 78.67, 72.57,
    19.20, 17.66, 41.71, 38.39, 58.49, 54.70, 68.99, 63.45, 72.34, 66.51,
    74.00, 68.04, 20.21, 18.58, 43.88, 40.43, 61.68, 57.77, 72.62, 66.76,
    76.13, 69.99, 77.87, 71.62, 20.07, 18.54, 43.66, 40.59, 62.29, 58.60,
    72.12, 66.57, 75.61, 69.86, 77.36, 71.65, 19.01, 17.74, 41.58, 39.02,
    60.01, 56.20, 68.26, 63.63, 71.62, 66.85, 73.44, 68.72, 19.91, 18.61,
    43.61, 40.97, 62.99, 58.89, 71.48, 66.76, 75.03, 70.16, 76.97, 72.13,
    20.06, 18.87, 44.15, 41.49, 63.52, 58.80, 71.96, 67.67, 75.62, 71.13,
    77.74, 73.13, 19.41, 18.21, 42.71, 39.84, 60.61, 55.74, 69.63, 65.36,
    73.19, 68.64, 75.25, 70.43, 20.28, 19.00, 44.59, 41.51, 63.09, 58.00,
    72.74, 68.19, 76.45, 71.60, 78.59, 73.43, 20.48, 19.00, 44.78, 41.30,
    62.61, 57.79, 73.51, 68.26, 77.19, 71.58, 79.19, 73.26, 19.66, 18.10,
    42.75, 39.31, 59.78, 55.71, 70.63, 65.04, 74.08, 68.17, 75.82, 69.72,
    20.39, 18.75, 44.30, 40.75, 62.04, 57.94, 73.25, 67.40, 76.82, 70.64,
    78.60, 72.26, 20.24, 18.65, 43.97, 40.74, 62.42, 58.69, 72.74, 66.99,
    76.24, 70.27, 77.98, 72.01, 19.36, 18.00, 42.26, 39.56, 60.83, 57.10,
    69.54, 64.60, 72.94, 67.85, 74.73, 69.70, 20.02, 18.65, 43.76, 41.02,
    63.09, 59.15, 71.90, 66.93, 75.43, 70.31, 77.32, 72.25, 20.09, 18.88,
    44.17, 41.55, 63.73, 59.18, 72.10, 67.70, 75.73, 71.16, 77.81, 73.18,
    19.62, 18.44, 43.19, 40.42, 61.61, 56.74, 70.36, 66.15, 73.96, 69.50,
    76.06, 71.37, 20.29, 19.05, 44.66, 41.71, 63.52, 58.44, 72.78, 68.37,
    76.50, 71.81, 78.66, 73.71, 20.52, 19.10, 44.95, 41.57, 63.05, 58.06,
    73.63, 68.60, 77.35, 71.97, 79.41, 73.70, 19.93, 18.38, 43.39, 39.90,
    60.58, 56.27, 71.57, 66.05, 75.09, 69.23, 76.91, 70.80, 20.50, 18.89,
    44.61, 41.01, 62.32, 58.00, 73.65, 67.87, 77.25, 71.14, 79.09, 72.76,
    20.37, 18.74, 44.23, 40.85, 62.46, 58.65, 73.21, 67.33, 76.74, 70.60,
    78.48, 72.29, 19.60, 18.16, 42.70, 39.84, 61.22, 57.56, 70.42, 65.19,
    73.84, 68.45, 75.59, 70.26, 20.11, 18.67, 43.87, 41.01, 63.05, 59.23,
    72.26, 67.02, 75.78, 70.38, 77.61, 72.28, 20.11, 18.86, 44.14, 41.52,
    63.77, 59.42, 72.19, 67.63, 75.80, 71.08, 77.82, 73.10, 19.72, 18.55,
    43.42, 40.74, 62.23, 57.44, 70.73, 66.54, 74.34, 69.93, 76.45, 71.86,
    20.27, 19.06, 44.63, 41.81, 63.80, 58.80, 72.70, 68.38, 76.41, 71.85,
    78.59, 73.80, 20.52, 19.16, 45.03, 41.77, 63.41, 58.31, 73.59, 68.79,
    77.33, 72.20, 79.45, 73.99, 8.14, 7.65, 17.93, 16.76, 25.53, 23.49,
    29.21, 27.45, 30.70, 28.83, 31.57, 29.60, 23.05, 21.63, 50.72, 47.32,
    72.00, 66.22, 82.68, 77.62, 86.90, 81.51, 89.35, 83.65, 24.09, 22.40,
    52.74, 48.72, 73.87, 68.08, 86.45, 80.45, 90.80, 84.39, 93.20, 86.39,
    19.14, 17.63, 41.64, 38.29, 58.16, 54.09, 68.73, 63.37, 72.10, 66.42,
    73.83, 67.93, 25.12, 23.12, 54.62, 50.22, 76.36, 71.15, 90.23, 83.10,
    94.64, 87.10, 96.87, 89.08, 25.30, 23.28, 54.93, 50.79, 77.71, 73.01,
    90.91, 83.64, 95.29, 87.72, 97.45, 89.84, 21.57, 20.01, 47.03, 43.93,
    67.52, 63.46, 77.49, 71.83, 81.26, 75.42, 83.21, 77.44, 25.31, 23.52,
    55.24, 51.69, 79.48, 74.62, 90.90, 84.42, 95.35, 88.67, 97.68, 91.08,
    25.55, 23.97, 56.11, 52.78, 81.03, 75.42, 91.69, 85.98, 96.29, 90.37,
    98.89, 92.94, 23.05, 21.68, 50.76, 47.58, 72.64, 66.98, 82.69, 77.78,
    86.91, 81.73, 89.38, 83.97, 25.90, 24.34, 57.02, 53.36, 81.36, 74.94,
    92.88, 87.33, 97.63, 91.75, 100.40, 94.23, 26.35, 24.59, 57.81, 53.57,
    81.28, 74.77, 94.55, 88.28, 99.34, 92.64, 102.04, 94.91, 24.22, 22.38,
    52.81, 48.58, 73.71, 68.31, 86.97, 80.40, 91.28, 84.29, 93.54, 86.21,
    26.45, 24.40, 57.61, 52.97, 80.43, 74.68, 95.00, 87.68, 99.68, 91.92,
    102.10, 94.00, 26.42, 24.29, 57.36, 52.90, 80.76, 75.72, 94.95, 87.29,
    99.53, 91.52, 101.79, 93.67, 24.32, 22.49, 52.92, 49.26, 75.64, 71.15,
    87.37, 80.73, 91.60, 84.73, 93.74, 86.93, 26.10, 24.18, 56.85, 53.03,
    81.48, 76.61, 93.76, 86.78, 98.31, 91.11, 100.64, 93.51, 26.12, 24.44,
    57.26, 53.82, 82.72, 77.25, 93.77, 87.68, 98.43, 92.15, 101.01, 94.75,
    24.68, 23.22, 54.34, 51.04, 78.08, 72.19, 88.54, 83.29, 93.05, 87.54,
    95.67, 89.98, 26.29, 24.73, 57.88, 54.31, 82.98, 76.60, 94.29, 88.70,
    99.09, 93.22, 101.90, 95.79, 26.68, 24.96, 58.62, 54.50, 82.79, 76.12,
    95.69, 89.62, 100.56, 94.08, 103.36, 96.46, 25.43, 23.56, 55.55, 51.19,
    77.62, 71.71, 91.28, 84.65, 95.83, 88.76, 98.29, 90.82, 26.82, 24.80,
    58.51, 53.86, 81.69, 75.60, 96.27, 89.11, 101.05, 93.43, 103.58, 95.57,
    26.79, 24.63, 58.19, 53.55, 81.58, 76.28, 96.25, 88.52, 100.92, 92.79,
    103.24, 94.92, 25.27, 23.31, 54.93, 50.96, 78.12, 73.48, 90.83, 83.71,
    95.21, 87.82, 97.39, 90.02, 26.43, 24.41, 57.48, 53.43, 81.99, 77.13,
    94.97, 87.65, 99.56, 91.98, 101.86, 94.33, 26.34, 24.57, 57.61, 54.05,
    83.12, 77.86, 94.58, 88.14, 99.24, 92.61, 101.75, 95.19, 25.29, 23.77,
    55.62, 52.31, 80.18, 74.37, 90.73, 85.25, 95.32, 89.61, 97.96, 92.15,
    26.40, 24.83, 58.10, 54.62, 83.62, 77.42, 94.72, 89.06, 99.53, 93.61,
    102.31, 96.25, 26.75, 25.10, 58.86, 54.91, 83.55, 76.84, 95.95, 90.07,
    100.85, 94.59, 103.70, 97.07, 25.94, 24.12, 56.79, 52.46, 79.55, 73.31,
    93.10, 86.63, 97.78, 90.87, 100.37, 93.03, 26.96, 25.02, 58.95, 54.37,
    82.44, 76.07, 96.76, 89.87, 101.61, 94.25, 104.25, 96.45, 26.99, 24.84,
    58.68, 53.95, 82.04, 76.45, 96.94, 89.28, 101.68, 93.58, 104.07, 95.70,
    25.80, 23.75, 56.03, 51.81, 79.27, 74.48, 92.73, 85.31, 97.20, 89.47,
    99.40, 91.64, 26.65, 24.55, 57.89, 53.63, 82.15, 77.24, 95.77, 88.19,
    100.39, 92.51, 102.68, 94.80, 26.48, 24.62, 57.80, 54.09, 83.17, 78.08,
    95.12, 88.34, 99.76, 92.78, 102.20, 95.30, 25.60, 24.02, 56.22, 52.89,
    81.20, 75.57, 91.88, 86.15, 96.48, 90.55, 99.09, 93.13, 26.45, 24.84,
    58.14, 54.69, 83.89, 77.92, 94.90, 89.10, 99.69, 93.66, 102.42, 96.32,
    26.74, 25.14, 58.88, 55.11, 84.02, 77.38, 95.92, 90.19, 100.82, 94.75,
    103.69, 97.31, 26.20, 24.44, 57.46, 53.25, 80.79, 74.33, 93.99, 87.75,
    98.75, 92.09, 101.44, 94.34, 27.01, 25.15, 59.18, 54.74, 83.02, 76.44,
    96.92, 90.32, 101.81, 94.76, 104.54, 97.04, 27.11, 25.00, 59.03, 54.28,
    82.41, 76.53, 97.35, 89.85, 102.14, 94.18, 104.62, 96.32, 26.16, 24.05,
    56.79, 52.37, 79.95, 74.96, 93.99, 86.41, 98.53, 90.60, 100.77, 92.73,
    26.83, 24.68, 58.24, 53.79, 82.22, 77.19, 96.40, 88.65, 101.05, 92.96,
    103.34, 95.19, 26.61, 24.65, 57.96, 54.06, 83.07, 78.11, 95.59, 88.48,
    100.23, 92.89, 102.60, 95.34, 25.80, 24.15, 56.56, 53.17, 81.71, 76.31,
    92.63, 86.62, 97.23, 91.03, 99.78, 93.60, 26.48, 24.82, 58.11, 54.65,
    83.95, 78.24, 95.04, 89.02, 99.79, 93.56, 102.45, 96.22, 26.71, 25.12,
    58.81, 55.18, 84.31, 77.82, 95.80, 90.12, 100.68, 94.71, 103.53, 97.33,
    8.31, 7.79, 18.27, 17.01, 25.85, 23.77, 29.81, 27.94, 31.33, 29.34,
    32.21, 30.09, 23.52, 21.99, 51.66, 47.99, 72.89, 67.01, 84.36, 78.96,
    88.65, 82.88, 91.11, 84.97, 24.51, 22.69, 53.51, 49.29, 74.75, 69.10,
    87.98, 81.53, 92.36, 85.49, 94.71, 87.46, 19.39, 17.84, 42.14, 38.76,
    59.01, 55.11, 69.68, 64.10, 73.06, 67.19, 74.76, 68.73, 25.44, 23.39,
    55.26, 50.87, 77.54, 72.54, 91.42, 84.06, 95.85, 88.12, 98.05, 90.16,
    25.59, 23.61, 55.63, 51.64, 79.20, 74.50, 91.96, 84.79, 96.40, 88.97,
    98.61, 91.22, 21.87, 20.37, 47.80, 44.81, 68.91, 64.60, 78.54, 73.10,
    82.39, 76.80, 84.45, 78.92, 25.67, 23.97, 56.19, 52.74, 81.10, 75.92,
    92.19, 85.98, 96.74, 90.35, 99.21, 92.87, 26.02, 24.46, 57.24, 53.83,
    82.47, 76.44, 93.35, 87.74, 98.08, 92.23, 100.81, 94.83, 23.53, 22.09,
    51.78, 48.36, 73.65, 67.76, 84.38, 79.27, 88.70, 83.26, 91.21, 85.47,
    26.43, 24.78, 58.13, 54.20, 82.44, 75.81, 94.79, 88.95, 99.63, 93.41,
    102.44, 95.84, 26.84, 24.94, 58.74, 54.23, 82.22, 75.80, 96.33, 89.58,
    101.17, 93.95, 103.83, 96.17, 24.58, 22.64, 53.47, 49.16, 74.70, 69.52,
    88.28, 81.36, 92.60, 85.28, 94.81, 87.21, 26.82, 24.68, 58.31, 53.62,
    81.56, 76.06, 96.36, 88.71, 101.06, 92.98, 103.43, 95.10, 26.73, 24.61,
    58.05, 53.71, 82.22, 77.27, 96.06, 88.41, 100.69, 92.72, 102.98, 94.98,
    24.63, 22.86, 53.71, 50.21, 77.19, 72.52, 88.47, 82.06, 92.78, 86.17,
    95.02, 88.49, 26.44, 24.60, 57.75, 54.07, 83.15, 78.03, 94.98, 88.28,
    99.63, 92.72, 102.08, 95.26, 26.57, 24.94, 58.37, 54.92, 84.28, 78.38,
    95.35, 89.46, 100.14, 94.03, 102.86, 96.70, 25.18, 23.68, 55.45, 51.95,
    79.26, 73.05, 90.32, 84.95, 94.93, 89.26, 97.63, 91.69, 26.82, 25.20,
    59.05, 55.23, 84.17, 77.49, 96.21, 90.43, 101.12, 95.00, 104.00, 97.55,
    27.20, 25.35, 59.63, 55.22, 83.77, 77.09, 97.58, 91.05, 102.52, 95.53,
    105.29, 97.86, 25.84, 23.85, 56.30, 51.78, 78.59, 72.88, 92.77, 85.71,
    97.35, 89.85, 99.74, 91.89, 27.22, 25.10, 59.26, 54.49, 82.75, 76.90,
    97.77, 90.19, 102.57, 94.54, 105.05, 96.68, 27.11, 24.93, 58.86, 54.31,
    82.95, 77.82, 97.43, 89.58, 102.13, 93.93, 104.45, 96.15, 25.58, 23.67,
    55.68, 51.88, 79.68, 74.95, 91.91, 84.97, 96.36, 89.19, 98.62, 91.53,
    26.76, 24.81, 58.31, 54.43, 83.65, 78.64, 96.13, 89.04, 100.80, 93.49,
    103.20, 95.97, 26.75, 25.05, 58.67, 55.17, 84.77, 79.11, 96.04, 89.87,
    100.83, 94.45, 103.48, 97.12, 25.78, 24.25, 56.76, 53.30, 81.49, 75.30,
    92.48, 87.00, 97.19, 91.43, 99.93, 93.98, 26.93, 25.33, 59.30, 55.61,
    84.93, 78.35, 96.59, 90.87, 101.52, 95.49, 104.40, 98.11, 27.29, 25.52,
    59.95, 55.69, 84.58, 77.77, 97.90, 91.63, 102.88, 96.18, 105.73, 98.60,
    26.39, 24.44, 57.63, 53.08, 80.49, 74.41, 94.74, 87.80, 99.46, 92.06,
    101.99, 94.18, 27.41, 25.33, 59.77, 55.00, 83.44, 77.28, 98.40, 91.02,
    103.28, 95.43, 105.85, 97.61, 27.34, 25.13, 59.36, 54.66, 83.31, 77.94,
    98.22, 90.31, 102.98, 94.68, 105.34, 96.86, 26.10, 24.08, 56.74, 52.68,
    80.79, 76.00, 93.80, 86.49, 98.33, 90.75, 100.59, 93.04, 26.96, 24.92,
    58.66, 54.57, 83.77, 78.81, 96.89, 89.47, 101.58, 93.90, 103.94, 96.32,
    26.86, 25.08, 58.79, 55.19, 84.86, 79.44, 96.46, 89.97, 101.23, 94.53,
    103.81, 97.18, 26.07, 24.51, 57.36, 53.94, 82.64, 76.59, 93.54, 87.92,
    98.28, 92.42, 101.01, 95.03, 26.95, 25.35, 59.33, 55.75, 85.31, 78.93,
    96.69, 90.93, 101.60, 95.58, 104.45, 98.26, 27.29, 25.59, 60.03, 55.97,
    85.13, 78.28, 97.89, 91.86, 102.89, 96.46, 105.79, 98.97, 26.68, 24.79,
    58.38, 53.90, 81.73, 75.35, 95.76, 89.04, 100.57, 93.39, 103.21, 95.59,
    27.49, 25.49, 60.08, 55.39, 83.99, 77.55, 98.68, 91.58, 103.62, 96.04,
    106.29, 98.27, 27.49, 25.29, 59.75, 54.94, 83.58, 77.94, 98.74, 90.90,
    103.55, 95.27, 105.98, 97.44, 26.46, 24.36, 57.47, 53.17, 81.40, 76.50,
    95.09, 87.52, 99.68, 91.79, 101.94, 94.03, 27.14, 25.01, 58.96, 54.66,
    83.76, 78.78, 97.52, 89.84, 102.22, 94.25, 104.55, 96.59, 26.96, 25.08,
    58.88, 55.13, 84.78, 79.56, 96.84, 90.00, 101.58, 94.54, 104.08, 97.13,
    26.25, 24.64, 57.66, 54.25, 83.26, 77.43, 94.19, 88.37, 98.92, 92.89,
    101.61, 95.52, 26.95, 25.33, 59.27, 55.75, 85.48, 79.34, 96.71, 90.84,
    101.59, 95.48, 104.39, 98.19, 27.25, 25.61, 60.00, 56.11, 85.51, 78.73,
    97.75, 91.88, 102.74, 96.52, 105.66, 99.11, 7.32, 6.83, 16.07, 14.89,
    22.60, 20.79, 26.27, 24.54, 27.60, 25.75, 28.35, 26.38, 20.71, 19.29,
    45.39, 42.00, 63.70, 58.64, 74.31, 69.28, 78.06, 72.69, 80.16, 74.45,
    21.51, 19.84, 46.84, 43.08, 65.39, 60.69, 77.23, 71.30, 81.03, 74.75,
    83.01, 76.44, 16.96, 15.59, 36.83, 33.95, 51.81, 48.56, 60.95, 56.04,
    63.90, 58.75, 65.35, 60.13, 22.24, 20.46, 48.29, 44.58, 68.13, 63.94,
    79.94, 73.50, 83.79, 77.07, 85.69, 78.91, 22.38, 20.72, 48.73, 45.44,
    69.80, 65.64, 80.40, 74.38, 84.30, 78.08, 86.29, 80.14, 19.18, 17.94,
    42.04, 39.51, 60.72, 56.73, 68.87, 64.37, 72.29, 67.64, 74.17, 69.55,
    22.54, 21.12, 49.45, 46.50, 71.44, 66.62, 80.90, 75.75, 84.94, 79.61,
    87.19, 81.87, 22.92, 21.56, 50.47, 47.37, 72.40, 66.85, 82.22, 77.35,
    86.41, 81.29, 88.85, 83.54, 20.74, 19.42, 45.58, 42.40, 64.42, 59.23,
    74.39, 69.70, 78.18, 73.17, 80.36, 75.03, 23.29, 21.77, 51.14, 47.48,
    72.09, 66.28, 83.55, 78.15, 87.80, 82.03, 90.22, 84.08, 23.59, 21.82,
    51.47, 47.39, 71.88, 66.49, 84.67, 78.41, 88.88, 82.21, 91.12, 84.10,
    21.52, 19.79, 46.74, 43.01, 65.50, 61.21, 77.30, 71.10, 81.05, 74.53,
    82.93, 76.24, 23.47, 21.58, 50.96, 46.93, 71.57, 67.00, 84.32, 77.53,
    88.40, 81.28, 90.43, 83.16, 23.36, 21.57, 50.80, 47.20, 72.41, 68.12,
    83.95, 77.45, 88.00, 81.27, 90.03, 83.34, 21.57, 20.12, 47.18, 44.25,
    68.05, 63.76, 77.48, 72.17, 81.29, 75.83, 83.34, 77.93, 23.18, 21.66,
    50.76, 47.67, 73.29, 68.56, 83.24, 77.69, 87.36, 81.64, 89.60, 83.93,
    23.38, 21.99, 51.45, 48.37, 74.08, 68.62, 83.89, 78.87, 88.14, 82.90,
    90.60, 85.24, 22.20, 20.84, 48.85, 45.60, 69.40, 63.84, 79.63, 74.78,
    83.70, 78.54, 86.07, 80.60, 23.65, 22.17, 52.00, 48.45, 73.66, 67.73,
    84.82, 79.55, 89.15, 83.53, 91.66, 85.69, 23.93, 22.21, 52.33, 48.28,
    73.21, 67.53, 85.87, 79.79, 90.18, 83.68, 92.53, 85.64, 22.64, 20.85,
    49.24, 45.27, 68.82, 64.10, 81.33, 74.91, 85.30, 78.52, 87.32, 80.31,
    23.84, 21.93, 51.81, 47.65, 72.52, 67.67, 85.65, 78.82, 89.82, 82.62,
    91.91, 84.50, 23.70, 21.83, 51.47, 47.66, 72.98, 68.61, 85.15, 78.39,
    89.26, 82.23, 91.29, 84.25, 22.38, 20.80, 48.84, 45.69, 70.25, 65.97,
    80.41, 74.64, 84.33, 78.39, 86.38, 80.51, 23.43, 21.81, 51.19, 47.96,
    73.76, 69.18, 84.15, 78.27, 88.27, 82.22, 90.46, 84.48, 23.52, 22.09,
    51.69, 48.62, 74.60, 69.33, 84.39, 79.21, 88.64, 83.26, 91.06, 85.63,
    22.73, 21.36, 50.04, 46.85, 71.44, 65.82, 81.51, 76.64, 85.67, 80.53,
    88.10, 82.71, 23.74, 22.30, 52.26, 48.84, 74.40, 68.48, 85.15, 80.02,
    89.50, 84.05, 92.04, 86.29, 24.03, 22.39, 52.67, 48.74, 73.92, 68.05,
    86.23, 80.40, 90.59, 84.35, 93.03, 86.39, 23.16, 21.37, 50.44, 46.39,
    70.42, 65.36, 83.16, 76.78, 87.26, 80.49, 89.39, 82.32, 24.03, 22.14,
    52.29, 48.08, 73.04, 67.93, 86.31, 79.58, 90.54, 83.41, 92.71, 85.30,
    23.90, 21.98, 51.88, 47.90, 73.20, 68.70, 85.88, 78.97, 90.02, 82.81,
    92.06, 84.78, 22.82, 21.14, 49.71, 46.35, 71.20, 66.96, 82.01, 75.87,
    85.98, 79.65, 88.01, 81.75, 23.59, 21.88, 51.43, 48.04, 73.85, 69.40,
    84.74, 78.55, 88.86, 82.48, 91.00, 84.69, 23.58, 22.10, 51.74, 48.66,
    74.75, 69.71, 84.65, 79.26, 88.88, 83.30, 91.24, 85.66, 22.97, 21.61,
    50.57, 47.46, 72.54, 66.98, 82.39, 77.50, 86.58, 81.45, 89.03, 83.71,
    23.75, 22.34, 52.30, 49.02, 74.83, 69.00, 85.19, 80.14, 89.54, 84.21,
    92.09, 86.51, 24.05, 22.48, 52.81, 49.03, 74.44, 68.45, 86.28, 80.70,
    90.67, 84.71, 93.17, 86.82, 23.44, 21.69, 51.17, 47.11, 71.45, 66.09,
    84.16, 77.94, 88.35, 81.72, 90.58, 83.59, 24.14, 22.30, 52.62, 48.41,
    73.45, 68.07, 86.67, 80.12, 90.96, 83.99, 93.21, 85.90, 24.05, 22.11,
    52.22, 48.09, 73.34, 68.66, 86.40, 79.44, 90.59, 83.28, 92.66, 85.21,
    23.13, 21.35, 50.29, 46.72, 71.68, 67.44, 83.11, 76.67, 87.12, 80.46,
    89.13, 82.50, 23.72, 21.94, 51.63, 48.06, 73.80, 69.43, 85.24, 78.76,
    89.36, 82.67, 91.45, 84.81, 23.64, 22.08, 51.75, 48.60, 74.73, 69.90,
    84.87, 79.21, 89.06, 83.24, 91.35, 85.57, 23.10, 21.72, 50.83, 47.78,
    73.18, 67.78, 82.87, 77.91, 87.07, 81.89, 89.50, 84.20, 23.73, 22.33,
    52.25, 49.08, 75.08, 69.41, 85.14, 80.09, 89.47, 84.17, 91.99, 86.52,
    24.03, 22.52, 52.84, 49.22, 74.84, 68.81, 86.18, 80.82, 90.58, 84.87,
    93.12, 87.06, 8.46, 7.96, 18.63, 17.47, 26.68, 24.61, 30.34, 28.54,
    31.89, 29.99, 32.79, 30.82, 23.94, 22.51, 52.71, 49.36, 75.29, 69.37,
    85.86, 80.75, 90.25, 84.84, 92.81, 87.14, 25.06, 23.40, 54.99, 50.99,
    77.39, 71.18, 89.91, 84.00, 94.47, 88.16, 97.05, 90.33, 19.98, 18.47,
    43.58, 40.10, 60.83, 56.34, 71.74, 66.36, 75.30, 69.57, 77.17, 71.16,
    26.25, 24.22, 57.18, 52.58, 79.82, 74.06, 94.25, 87.04, 98.90, 91.24,
    101.32, 93.31, 26.50, 24.36, 57.53, 53.02, 80.92, 75.83, 95.21, 87.53,
    99.81, 91.77, 102.09, 93.92, 22.58, 20.86, 49.11, 45.69, 70.13, 65.98,
    81.12, 74.91, 85.04, 78.62, 87.02, 80.64, 26.47, 24.51, 57.65, 53.73,
    82.55, 77.63, 95.12, 87.98, 99.73, 92.36, 102.08, 94.78, 26.63, 24.90,
    58.34, 54.82, 84.27, 78.75, 95.59, 89.33, 100.34, 93.87, 102.94, 96.52,
    23.95, 22.53, 52.72, 49.54, 75.82, 70.14, 85.93, 80.81, 90.29, 84.94,
    92.83, 87.32, 26.90, 25.31, 59.23, 55.60, 84.98, 78.49, 96.49, 90.77,
    101.41, 95.40, 104.27, 98.04, 27.39, 25.65, 60.21, 56.02, 85.12, 78.26,
    98.25, 92.07, 103.26, 96.66, 106.15, 99.12, 25.26, 23.42, 55.20, 50.89,
    77.17, 71.25, 90.67, 84.14, 95.20, 88.23, 97.65, 90.29, 27.61, 25.55,
    60.26, 55.49, 84.16, 77.83, 99.11, 91.80, 104.04, 96.25, 106.67, 98.47,
    27.66, 25.44, 60.09, 55.29, 84.20, 78.67, 99.38, 91.42, 104.21, 95.82,
    106.62, 98.02, 25.47, 23.47, 55.33, 51.29, 78.61, 73.93, 91.51, 84.31,
    95.93, 88.44, 98.12, 90.64, 27.32, 25.22, 59.40, 55.18, 84.64, 79.63,
    98.18, 90.56, 102.91, 95.02, 105.28, 97.44, 27.26, 25.41, 59.60, 55.89,
    85.96, 80.55, 97.89, 91.17, 102.71, 95.78, 105.29, 98.44, 25.67, 24.12,
    56.43, 53.08, 81.39, 75.55, 92.09, 86.50, 96.74, 90.92, 99.40, 93.50,
    27.32, 25.69, 60.11, 56.52, 86.56, 80.19, 98.01, 92.14, 102.98, 96.85,
    105.85, 99.58, 27.71, 26.01, 60.98, 56.93, 86.66, 79.72, 99.39, 93.34,
    104.47, 98.03, 107.42, 100.62, 26.49, 24.64, 58.00, 53.61, 81.30, 74.89,
    95.03, 88.50, 99.83, 92.83, 102.48, 95.05, 27.95, 25.95, 61.13, 56.42,
    85.54, 78.89, 100.30, 93.22, 105.33, 97.77, 108.08, 100.06, 28.02, 25.80,
    60.95, 56.03, 85.17, 79.31, 100.65, 92.73, 105.58, 97.20, 108.08, 99.40,
    26.48, 24.36, 57.49, 53.12, 81.25, 76.31, 95.15, 87.52, 99.73, 91.78,
    102.00, 93.99, 27.68, 25.49, 60.13, 55.66, 85.23, 80.12, 99.48, 91.58,
    104.28, 96.06, 106.65, 98.41, 27.52, 25.56, 60.04, 56.15, 86.34, 81.09,
    98.85, 91.74, 103.68, 96.35, 106.20, 98.96, 26.32, 24.69, 57.79, 54.36,
    83.47, 77.74, 94.47, 88.54, 99.20, 93.06, 101.86, 95.70, 27.46, 25.79,
    60.35, 56.78, 87.12, 80.98, 98.56, 92.50, 103.52, 97.22, 106.34, 99.99,
    27.78, 26.12, 61.17, 57.28, 87.37, 80.50, 99.64, 93.71, 104.73, 98.45,
    107.71, 101.12, 26.99, 25.19, 59.22, 54.91, 83.34, 76.65, 96.82, 90.46,
    101.74, 94.94, 104.52, 97.28, 28.07, 26.15, 61.52, 56.93, 86.36, 79.49,
    100.70, 93.91, 105.79, 98.53, 108.64, 100.91, 28.20, 26.02, 61.43, 56.50,
    85.75, 79.58, 101.26, 93.51, 106.26, 98.03, 108.85, 100.25, 27.03, 24.85,
    58.68, 54.09, 82.54, 77.35, 97.12, 89.29, 101.81, 93.61, 104.13, 95.80,
    27.92, 25.68, 60.61, 55.94, 85.48, 80.22, 100.33, 92.25, 105.16, 96.73,
    107.55, 99.03, 27.70, 25.64, 60.32, 56.23, 86.37, 81.23, 99.52, 92.06,
    104.34, 96.64, 106.80, 99.18, 26.68, 24.95, 58.46, 54.93, 84.45, 78.91,
    95.78, 89.51, 100.54, 94.06, 103.15, 96.72, 27.54, 25.80, 60.42, 56.82,
    87.29, 81.42, 98.87, 92.55, 103.80, 97.27, 106.55, 100.03, 27.78, 26.13,
    61.16, 57.41, 87.76, 81.05, 99.65, 93.74, 104.72, 98.52, 107.68, 101.25,
    27.23, 25.50, 59.85, 55.68, 84.61, 77.79, 97.67, 91.52, 102.65, 96.08,
    105.51, 98.53, 28.09, 26.26, 61.68, 57.27, 86.96, 79.96, 100.76, 94.26,
    105.88, 98.94, 108.81, 101.41, 28.29, 26.18, 61.75, 56.86, 86.23, 79.76,
    101.56, 94.06, 106.61, 98.63, 109.30, 100.89, 27.38, 25.18, 59.49, 54.73,
    83.35, 77.88, 98.38, 90.50, 103.16, 94.86, 105.55, 97.04, 28.09, 25.83,
    61.00, 56.18, 85.66, 80.18, 100.94, 92.81, 105.83, 97.30, 108.25, 99.55,
    27.85, 25.71, 60.56, 56.26, 86.30, 81.18, 100.09, 92.33, 104.92, 96.88,
    107.34, 99.34, 26.93, 25.10, 58.87, 55.21, 84.91, 79.57, 96.70, 90.06,
    101.45, 94.62, 104.00, 97.24, 27.61, 25.79, 60.44, 56.76, 87.27, 81.65,
    99.13, 92.51, 104.04, 97.21, 106.70, 99.93, 27.76, 26.10, 61.07, 57.42,
    87.95, 81.47, 99.58, 93.62, 104.63, 98.40, 107.54, 101.17, 8.58, 8.06,
    18.89, 17.65, 26.89, 24.75, 30.77, 28.92, 32.35, 30.38, 33.27, 31.19,
    24.29, 22.79, 53.43, 49.85, 75.85, 69.76, 87.10, 81.77, 91.55, 85.88,
    94.14, 88.12, 25.38, 23.59, 55.56, 51.32, 77.82, 71.71, 91.07, 84.75,
    95.66, 88.90, 98.19, 91.01, 20.16, 18.58, 43.87, 40.33, 61.27, 56.98,
    72.40, 66.75, 75.95, 69.97, 77.77, 71.56, 26.46, 24.36, 57.53, 52.90,
    80.44, 74.96, 95.05, 87.53, 99.69, 91.75, 102.04, 93.83, 26.65, 24.53,
    57.86, 53.51, 81.87, 76.92, 95.76, 88.11, 100.38, 92.40, 102.65, 94.64,
    22.72, 21.08, 49.54, 46.28, 71.14, 66.85, 81.63, 75.67, 85.60, 79.45,
    87.66, 81.58, 26.66, 24.78, 58.19, 54.46, 83.74, 78.62, 95.76, 88.94,
    100.44, 93.41, 102.90, 95.96, 26.92, 25.26, 59.11, 55.61, 85.37, 79.45,
    96.60, 90.58, 101.44, 95.21, 104.18, 97.91, 24.29, 22.84, 53.48, 50.13,
    76.52, 70.56, 87.12, 81.95, 91.56, 86.11, 94.16, 88.46, 27.28, 25.64,
    60.07, 56.22, 85.71, 78.94, 97.86, 92.01, 102.86, 96.66, 105.78, 99.27,
    27.77, 25.90, 60.90, 56.43, 85.62, 78.77, 99.61, 93.00, 104.66, 97.59,
    107.51, 99.98, 25.52, 23.57, 55.63, 51.18, 77.65, 71.97, 91.62, 84.70,
    96.16, 88.79, 98.54, 90.82, 27.87, 25.70, 60.69, 55.80, 84.72, 78.68,
    100.08, 92.37, 105.01, 96.82, 107.56, 99.02, 27.83, 25.59, 60.43, 55.72,
    85.08, 79.77, 100.02, 91.95, 104.85, 96.41, 107.23, 98.68, 25.61, 23.69,
    55.75, 51.90, 79.69, 74.96, 92.04, 85.05, 96.49, 89.26, 98.75, 91.58,
    27.49, 25.47, 59.89, 55.86, 85.84, 80.71, 98.77, 91.42, 103.56, 95.98,
    106.02, 98.52, 27.52, 25.75, 60.32, 56.70, 87.15, 81.38, 98.79, 92.38,
    103.70, 97.08, 106.42, 99.83, 26.01, 24.46, 57.25, 53.77, 82.26, 76.05,
    93.29, 87.75, 98.03, 92.22, 100.79, 94.80, 27.69, 26.05, 60.98, 57.22,
    87.42, 80.69, 99.34, 93.45, 104.40, 98.21, 107.36, 100.92, 28.11, 26.30,
    61.75, 57.41, 87.21, 80.18, 100.81, 94.41, 105.95, 99.11, 108.90, 101.62,
    26.79, 24.82, 58.52, 53.92, 81.76, 75.54, 96.16, 89.17, 100.96, 93.50,
    103.54, 95.67, 28.25, 26.13, 61.63, 56.73, 86.05, 79.64, 101.42, 93.87,
    106.45, 98.42, 109.12, 100.67, 28.22, 25.95, 61.29, 56.41, 85.95, 80.36,
    101.39, 93.25, 106.31, 97.74, 108.76, 99.99, 26.62, 24.55, 57.86, 53.68,
    82.30, 77.41, 95.68, 88.18, 100.29, 92.52, 102.59, 94.84, 27.84, 25.71,
    60.55, 56.29, 86.38, 81.26, 100.04, 92.33, 104.87, 96.89, 107.30, 99.37,
    27.74, 25.88, 60.69, 56.95, 87.58, 82.02, 99.63, 92.86, 104.54, 97.57,
    107.19, 100.28, 26.64, 25.04, 58.60, 55.11, 84.47, 78.34, 95.59, 89.82,
    100.42, 94.41, 103.20, 97.08, 27.82, 26.16, 61.22, 57.54, 88.09, 81.55,
    99.79, 93.84, 104.85, 98.63, 107.79, 101.40, 28.18, 26.44, 62.01, 57.84,
    88.02, 80.95, 101.08, 94.89, 106.25, 99.66, 109.25, 102.26, 27.33, 25.41,
    59.83, 55.26, 83.80, 77.23, 98.08, 91.26, 103.02, 95.73, 105.74, 98.00,
    28.40, 26.35, 62.10, 57.28, 86.84, 80.14, 101.94, 94.67, 107.05, 99.28,
    109.82, 101.60, 28.43, 26.17, 61.81, 56.84, 86.43, 80.54, 102.12, 94.04,
    107.11, 98.57, 109.63, 100.81, 27.18, 25.02, 59.02, 54.58, 83.51, 78.47,
    97.68, 89.87, 102.39, 94.25, 104.71, 96.54, 28.07, 25.87, 60.99, 56.50,
    86.55, 81.38, 100.89, 92.90, 105.75, 97.46, 108.16, 99.86, 27.89, 25.93,
    60.89, 56.98, 87.62, 82.26, 100.20, 93.06, 105.09, 97.74, 107.67, 100.41,
    26.97, 25.31, 59.23, 55.72, 85.54, 79.61, 96.79, 90.77, 101.65, 95.40,
    104.39, 98.11, 27.86, 26.17, 61.25, 57.62, 88.38, 82.08, 99.98, 93.88,
    105.02, 98.68, 107.90, 101.48, 28.18, 26.48, 62.04, 58.05, 88.51, 81.51,
    101.06, 95.02, 106.22, 99.82, 109.24, 102.51, 27.60, 25.75, 60.54, 56.09,
    85.10, 78.30, 99.02, 92.45, 104.04, 97.01, 106.86, 99.38, 28.46, 26.49,
    62.35, 57.66, 87.45, 80.52, 102.11, 95.15, 107.26, 99.82, 110.13, 102.22,
    28.56, 26.34, 62.18, 57.18, 86.82, 80.62, 102.55, 94.65, 107.60, 99.21,
    110.21, 101.46, 27.55, 25.33, 59.82, 55.16, 84.23, 78.98, 99.01, 91.03,
    103.79, 95.44, 106.15, 97.69, 28.26, 25.99, 61.35, 56.66, 86.62, 81.33,
    101.55, 93.39, 106.44, 97.93, 108.86, 100.27, 28.03, 25.97, 61.06, 56.96,
    87.52, 82.29, 100.69, 93.21, 105.58, 97.86, 108.09, 100.45, 27.18, 25.44,
    59.59, 56.01, 86.09, 80.39, 97.58, 91.26, 102.44, 95.90, 105.12, 98.61,
    27.89, 26.15, 61.22, 57.58, 88.44, 82.42, 100.12, 93.79, 105.12, 98.57,
    107.93, 101.37, 28.14, 26.47, 61.96, 58.13, 88.81, 81.97, 100.93, 94.95,
    106.07, 99.78, 109.08, 102.54, 7.82, 7.33, 17.19, 16.01, 24.33, 22.37,
    28.05, 26.30, 29.49, 27.61, 30.31, 28.32, 22.13, 20.70, 48.61, 45.16,
    68.59, 63.06, 79.39, 74.30, 83.43, 78.00, 85.74, 79.96, 23.06, 21.35,
    50.36, 46.38, 70.34, 65.03, 82.79, 76.72, 86.92, 80.44, 89.12, 82.30,
    18.25, 16.79, 39.65, 36.48, 55.53, 51.87, 65.57, 60.32, 68.75, 63.23,
    70.35, 64.68, 23.94, 22.01, 51.99, 47.87, 72.97, 68.27, 86.02, 79.10,
    90.19, 82.92, 92.26, 84.84, 24.08, 22.22, 52.35, 48.60, 74.54, 70.12,
    86.53, 79.79, 90.71, 83.72, 92.79, 85.84, 20.58, 19.17, 44.98, 42.17,
    64.85, 60.80, 73.91, 68.80, 77.54, 72.27, 79.48, 74.27, 24.16, 22.56,
    52.88, 49.64, 76.33, 71.44, 86.76, 80.92, 91.04, 85.03, 93.36, 87.40,
    24.49, 23.02, 53.87, 50.66, 77.61, 71.93, 87.86, 82.58, 92.30, 86.80,
    94.87, 89.25, 22.14, 20.79, 48.73, 45.51, 69.30, 63.76, 79.42, 74.60,
    83.47, 78.36, 85.84, 80.43, 24.87, 23.32, 54.71, 51.00, 77.57, 71.33,
    89.21, 83.71, 93.77, 87.91, 96.41, 90.19, 25.26, 23.47, 55.27, 51.03,
    77.37, 71.33, 90.66, 84.29, 95.21, 88.41, 97.71, 90.50, 23.13, 21.30,
    50.31, 46.26, 70.30, 65.43, 83.07, 76.56, 87.14, 80.24, 89.22, 82.06,
    25.24, 23.23, 54.87, 50.45, 76.75, 71.58, 90.68, 83.47, 95.10, 87.49,
    97.33, 89.49, 25.15, 23.16, 54.63, 50.55, 77.38, 72.72, 90.39, 83.19,
    94.75, 87.25, 96.90, 89.38, 23.17, 21.52, 50.55, 47.25, 72.65, 68.25,
    83.25, 77.22, 87.30, 81.10, 89.42, 83.28, 24.88, 23.15, 54.34, 50.89,
    78.26, 73.44, 89.38, 83.08, 93.75, 87.26, 96.06, 89.65, 25.00, 23.47,
    54.94, 51.68, 79.32, 73.76, 89.73, 84.19, 94.24, 88.49, 96.81, 91.01,
    23.70, 22.29, 52.19, 48.88, 74.59, 68.74, 85.00, 79.95, 89.35, 84.00,
    91.88, 86.29, 25.25, 23.72, 55.58, 51.97, 79.21, 72.92, 90.54, 85.11,
    95.17, 89.41, 97.87, 91.80, 25.60, 23.86, 56.12, 51.96, 78.82, 72.54,
    91.83, 85.68, 96.48, 89.90, 99.09, 92.08, 24.31, 22.44, 52.98, 48.73,
    73.95, 68.59, 87.30, 80.65, 91.61, 84.54, 93.86, 86.47, 25.62, 23.62,
    55.77, 51.27, 77.87, 72.37, 92.00, 84.86, 96.52, 88.96, 98.85, 90.97,
    25.51, 23.46, 55.39, 51.11, 78.07, 73.24, 91.68, 84.30, 96.10, 88.39,
    98.29, 90.48, 24.07, 22.27, 52.40, 48.82, 74.99, 70.53, 86.48, 79.96,
    90.67, 83.94, 92.80, 86.13, 25.18, 23.34, 54.87, 51.23, 78.73, 74.01,
    90.46, 83.79, 94.85, 87.98, 97.12, 90.32, 25.18, 23.58, 55.22, 51.92,
    79.78, 74.44, 90.38, 84.57, 94.88, 88.89, 97.39, 91.40, 24.26, 22.83,
    53.42, 50.16, 76.69, 70.85, 87.03, 81.87, 91.47, 86.05, 94.05, 88.44,
    25.34, 23.84, 55.81, 52.33, 79.92, 73.73, 90.90, 85.52, 95.54, 89.86,
    98.25, 92.33, 25.69, 24.02, 56.42, 52.41, 79.59, 73.18, 92.14, 86.23,
    96.82, 90.51, 99.51, 92.79, 24.84, 23.00, 54.23, 49.95, 75.74, 70.03,
    89.16, 82.62, 93.60, 86.63, 95.98, 88.62, 25.79, 23.84, 56.25, 51.76,
    78.52, 72.72, 92.60, 85.65, 97.19, 89.80, 99.61, 91.85, 25.72, 23.65,
    55.86, 51.43, 78.40, 73.35, 92.42, 84.98, 96.90, 89.09, 99.12, 91.15,
    24.56, 22.66, 53.40, 49.58, 76.03, 71.53, 88.27, 81.39, 92.53, 85.40,
    94.65, 87.56, 25.37, 23.45, 55.20, 51.36, 78.84, 74.17, 91.18, 84.20,
    95.58, 88.37, 97.81, 90.65, 25.28, 23.60, 55.33, 51.94, 79.87, 74.76,
    90.78, 84.67, 95.26, 88.97, 97.69, 91.46, 24.54, 23.07, 53.98, 50.76,
    77.77, 72.07, 88.03, 82.75, 92.49, 86.98, 95.06, 89.43, 25.37, 23.86,
    55.83, 52.46, 80.28, 74.27, 91.00, 85.58, 95.62, 89.95, 98.30, 92.47,
    25.69, 24.09, 56.50, 52.67, 80.11, 73.66, 92.13, 86.45, 96.84, 90.78,
    99.56, 93.14, 25.11, 23.33, 54.94, 50.72, 76.90, 70.91, 90.12, 83.79,
    94.64, 87.88, 97.13, 89.95, 25.87, 23.99, 56.54, 52.12, 79.03, 72.98,
    92.87, 86.18, 97.51, 90.37, 100.02, 92.47, 25.87, 23.80, 56.22, 51.70,
    78.65, 73.35, 92.91, 85.53, 97.44, 89.65, 99.73, 91.69, 24.90, 22.93,
    54.08, 50.04, 76.60, 72.00, 89.48, 82.35, 93.79, 86.38, 95.92, 88.49,
    25.53, 23.54, 55.48, 51.44, 78.83, 74.14, 91.76, 84.54, 96.19, 88.69,
    98.38, 90.90, 25.37, 23.60, 55.41, 51.89, 79.79, 74.87, 91.12, 84.70,
    95.58, 88.97, 97.94, 91.41, 24.70, 23.19, 54.27, 51.05, 78.35, 72.86,
    88.64, 83.17, 93.10, 87.42, 95.63, 89.90, 25.37, 23.84, 55.78, 52.46,
    80.44, 74.66, 91.01, 85.49, 95.61, 89.86, 98.24, 92.41, 25.65, 24.10,
    56.47, 52.80, 80.47, 74.08, 91.99, 86.47, 96.70, 90.84, 99.44, 93.27,
    8.61, 8.10, 18.96, 17.82, 27.28, 25.25, 30.90, 29.06, 32.47, 30.54,
    33.38, 31.40, 24.37, 22.93, 53.65, 50.38, 77.04, 71.20, 87.41, 82.23,
    91.86, 86.42, 94.45, 88.83, 25.52, 23.91, 56.11, 52.24, 79.41, 73.01,
    91.54, 85.82, 96.21, 90.11, 98.91, 92.43, 20.41, 18.94, 44.63, 41.16,
    62.41, 57.60, 73.26, 68.04, 76.94, 71.35, 78.93, 73.02, 26.83, 24.85,
    58.60, 53.98, 81.86, 75.66, 96.33, 89.28, 101.13, 93.62, 103.70, 95.78,
    27.18, 25.00, 59.05, 54.32, 82.69, 77.21, 97.64, 89.84, 102.39, 94.17,
    104.77, 96.32, 23.17, 21.35, 50.33, 46.63, 71.43, 67.16, 83.26, 76.68,
    87.28, 80.43, 89.26, 82.42, 27.16, 25.06, 59.04, 54.80, 84.04, 79.05,
    97.61, 89.99, 102.32, 94.42, 104.66, 96.80, 27.23, 25.37, 59.52, 55.79,
    85.80, 80.45, 97.81, 91.03, 102.62, 95.63, 105.18, 98.27, 24.41, 22.93,
    53.66, 50.48, 77.43, 71.91, 87.59, 82.24, 92.01, 86.45, 94.53, 88.90,
    27.40, 25.76, 60.28, 56.68, 86.85, 80.51, 98.31, 92.39, 103.28, 97.11,
    106.15, 99.86, 27.88, 26.18, 61.36, 57.32, 87.29, 80.32, 100.00, 93.94,
    105.11, 98.68, 108.09, 101.29, 25.78, 24.00, 56.47, 52.23, 79.21, 72.93,
    92.48, 86.18, 97.15, 90.41, 99.75, 92.58, 28.19, 26.19, 61.69, 56.96,
    86.36, 79.62, 101.16, 94.08, 106.25, 98.68, 109.04, 101.01, 28.35, 26.11,
    61.67, 56.70, 86.16, 80.18, 101.82, 93.84, 106.81, 98.36, 109.35, 100.60,
    26.14, 24.05, 56.76, 52.42, 80.13, 75.23, 93.94, 86.39, 98.47, 90.60,
    100.70, 92.76, 28.04, 25.82, 60.90, 56.34, 86.24, 81.04, 100.78, 92.74,
    105.64, 97.27, 108.03, 99.64, 27.92, 25.92, 60.88, 56.91, 87.48, 82.19,
    100.29, 93.01, 105.17, 97.67, 107.71, 100.30, 26.18, 24.55, 57.47, 54.05,
    83.02, 77.37, 93.98, 88.04, 98.68, 92.53, 101.32, 95.16, 27.85, 26.14,
    61.19, 57.56, 88.35, 82.18, 99.96, 93.77, 104.98, 98.56, 107.83, 101.36,
    28.20, 26.52, 62.10, 58.18, 88.78, 81.83, 101.15, 95.14, 106.31, 99.96,
    109.33, 102.69, 26.99, 25.22, 59.25, 54.98, 83.45, 76.75, 96.84, 90.53,
    101.76, 95.01, 104.55, 97.37, 28.50, 26.57, 62.50, 57.88, 87.81, 80.80,
    102.26, 95.43, 107.44, 100.13, 110.35, 102.57, 28.69, 26.49, 62.51, 57.50,
    87.26, 80.92, 103.00, 95.17, 108.09, 99.77, 110.75, 102.04, 27.17, 24.98,
    59.00, 54.36, 82.92, 77.67, 97.64, 89.77, 102.37, 94.11, 104.70, 96.30,
    28.42, 26.13, 61.69, 56.91, 86.93, 81.54, 102.11, 93.89, 107.04, 98.44,
    109.47, 100.77, 28.21, 26.10, 61.42, 57.21, 87.87, 82.65, 101.37, 93.71,
    106.28, 98.37, 108.77, 100.94, 26.89, 25.13, 58.89, 55.32, 85.05, 79.53,
    96.54, 90.16, 101.32, 94.74, 103.94, 97.40, 28.03, 26.25, 61.48, 57.80,
    88.82, 82.89, 100.64, 94.15, 105.65, 98.95, 108.43, 101.75, 28.28, 26.60,
    62.26, 58.47, 89.41, 82.62, 101.44, 95.43, 106.61, 100.29, 109.62, 103.09,
    27.49, 25.75, 60.43, 56.26, 85.52, 78.62, 98.58, 92.42, 103.61, 97.04,
    106.52, 99.53, 28.59, 26.74, 62.81, 58.36, 88.64, 81.50, 102.57, 96.01,
    107.79, 100.79, 110.78, 103.32, 28.83, 26.70, 62.96, 57.99, 87.94, 81.29,
    103.49, 95.92, 108.65, 100.58, 111.42, 102.90, 27.72, 25.50, 60.24, 55.41,
    84.35, 78.76, 99.60, 91.64, 104.44, 96.05, 106.87, 98.25, 28.65, 26.34,
    62.22, 57.28, 87.29, 81.66, 102.93, 94.65, 107.92, 99.22, 110.40, 101.51,
    28.42, 26.22, 61.77, 57.34, 87.94, 82.72, 102.13, 94.16, 107.05, 98.79,
    109.51, 101.29, 27.29, 25.42, 59.64, 55.91, 85.98, 80.61, 98.01, 91.22,
    102.82, 95.82, 105.39, 98.47, 28.15, 26.28, 61.60, 57.82, 88.91, 83.24,
    101.09, 94.27, 106.07, 99.05, 108.77, 101.82, 28.30, 26.60, 62.25, 58.53,
    89.69, 83.14, 101.52, 95.41, 106.66, 100.29, 109.62, 103.12, 27.72, 26.02,
    61.00, 56.98, 86.77, 79.84, 99.40, 93.38, 104.48, 98.09, 107.44, 100.69,
    28.60, 26.82, 62.90, 58.65, 89.22, 82.04, 102.57, 96.25, 107.81, 101.08,
    110.85, 103.71, 28.89, 26.84, 63.21, 58.36, 88.49, 81.58, 103.66, 96.40,
    108.87, 101.12, 111.73, 103.51, 28.06, 25.85, 61.05, 56.13, 85.29, 79.37,
    100.80, 92.90, 105.74, 97.37, 108.26, 99.58, 28.81, 26.51, 62.62, 57.58,
    87.59, 81.67, 103.48, 95.27, 108.53, 99.86, 111.07, 102.13, 28.59, 26.32,
    62.09, 57.44, 87.92, 82.63, 102.75, 94.55, 107.70, 99.17, 110.14, 101.59,
    27.58, 25.60, 60.14, 56.21, 86.42, 81.19, 99.06, 91.88, 103.89, 96.48,
    106.40, 99.08, 28.26, 26.28, 61.70, 57.77, 88.83, 83.37, 101.49, 94.32,
    106.46, 99.07, 109.08, 101.78, 28.30, 26.56, 62.17, 58.49, 89.76, 83.49,
    101.56, 95.27, 106.66, 100.14, 109.55, 102.98, 8.71, 8.19, 19.18, 17.98,
    27.46, 25.33, 31.24, 29.38, 32.83, 30.88, 33.76, 31.73, 24.65, 23.17,
    54.27, 50.82, 77.51, 71.41, 88.40, 83.13, 92.92, 87.34, 95.56, 89.71,
    25.80, 24.09, 56.62, 52.49, 79.66, 73.27, 92.56, 86.48, 97.26, 90.76,
    99.92, 92.99, 20.57, 19.01, 44.86, 41.28, 62.62, 58.00, 73.85, 68.31,
    77.51, 71.62, 79.44, 73.25, 27.02, 24.93, 58.86, 54.13, 82.17, 76.25,
    97.03, 89.60, 101.81, 93.92, 104.30, 96.06, 27.28, 25.08, 59.22, 54.58,
    83.30, 78.07, 98.01, 90.11, 102.75, 94.47, 105.09, 96.68, 23.24, 21.48,
    50.56, 47.04, 72.21, 67.93, 83.51, 77.12, 87.54, 80.93, 89.58, 83.02,
    27.25, 25.23, 59.34, 55.32, 84.99, 79.92, 97.91, 90.57, 102.66, 95.08,
    105.08, 97.58, 27.41, 25.64, 60.06, 56.44, 86.76, 81.07, 98.41, 91.97,
    103.29, 96.65, 105.98, 99.37, 24.66, 23.20, 54.28, 51.00, 78.05, 72.20,
    88.47, 83.20, 92.96, 87.45, 95.57, 89.90, 27.69, 26.05, 60.98, 57.24,
    87.49, 80.80, 99.34, 93.46, 104.40, 98.21, 107.35, 100.94, 28.20, 26.41,
    61.98, 57.67, 87.63, 80.56, 101.16, 94.78, 106.31, 99.51, 109.28, 102.05,
    26.01, 24.11, 56.83, 52.39, 79.44, 73.35, 93.34, 86.62, 98.01, 90.83,
    100.53, 92.94, 28.42, 26.30, 62.04, 57.12, 86.63, 80.13, 102.03, 94.50,
    107.11, 99.08, 109.81, 101.36, 28.48, 26.19, 61.86, 56.92, 86.68, 81.00,
    102.30, 94.10, 107.27, 98.64, 109.75, 100.90, 26.21, 24.16, 56.96, 52.81,
    80.93, 76.11, 94.21, 86.79, 98.75, 91.05, 101.00, 93.31, 28.12, 25.96,
    61.15, 56.80, 87.14, 81.98, 101.06, 93.23, 105.94, 97.82, 108.38, 100.31,
    28.06, 26.16, 61.36, 57.55, 88.50, 82.93, 100.77, 93.86, 105.73, 98.61,
    108.39, 101.35, 26.42, 24.83, 58.10, 54.65, 83.80, 77.77, 94.81, 89.06,
    99.60, 93.61, 102.34, 96.26, 28.13, 26.45, 61.89, 58.18, 89.12, 82.55,
    100.91, 94.86, 106.02, 99.71, 108.98, 102.52, 28.53, 26.78, 62.78, 58.60,
    89.21, 82.06, 102.33, 96.09, 107.56, 100.93, 110.60, 103.58, 27.27, 25.37,
    59.71, 55.19, 83.69, 77.09, 97.84, 91.10, 102.77, 95.57, 105.50, 97.85,
    28.77, 26.71, 62.93, 58.07, 88.05, 81.22, 103.26, 95.96, 108.44, 100.64,
    111.27, 103.01, 28.85, 26.56, 62.74, 57.68, 87.68, 81.65, 103.62, 95.45,
    108.68, 100.05, 111.26, 102.32, 27.26, 25.08, 59.18, 54.69, 83.65, 78.57,
    97.95, 90.10, 102.67, 94.48, 104.99, 96.76, 28.50, 26.25, 61.89, 57.30,
    87.75, 82.49, 102.41, 94.27, 107.34, 98.88, 109.78, 101.31, 28.33, 26.32,
    61.81, 57.81, 88.89, 83.48, 101.76, 94.45, 106.73, 99.19, 109.32, 101.88,
    27.10, 25.42, 59.50, 55.96, 85.94, 80.03, 97.26, 91.16, 102.13, 95.81,
    104.87, 98.53, 28.28, 26.55, 62.14, 58.46, 89.69, 83.36, 101.47, 95.23,
    106.57, 100.10, 109.48, 102.94, 28.60, 26.89, 62.98, 58.97, 89.94, 82.87,
    102.59, 96.47, 107.83, 101.36, 110.89, 104.11, 27.79, 25.94, 60.97, 56.53,
    85.79, 78.91, 99.68, 93.13, 104.74, 97.73, 107.60, 100.14, 28.90, 26.92,
    63.33, 58.61, 88.90, 81.83, 103.67, 96.67, 108.91, 101.43, 111.84, 103.88,
    29.03, 26.79, 63.24, 58.16, 88.28, 81.92, 104.25, 96.26, 109.39, 100.91,
    112.06, 103.20, 27.82, 25.58, 60.40, 55.68, 84.97, 79.64, 99.97, 91.91,
    104.80, 96.36, 107.19, 98.62, 28.74, 26.43, 62.39, 57.59, 88.01, 82.59,
    103.27, 94.96, 108.26, 99.58, 110.71, 101.94, 28.51, 26.40, 62.09, 57.89,
    88.93, 83.63, 102.45, 94.77, 107.41, 99.49, 109.95, 102.10, 27.47, 25.69,
    60.19, 56.56, 86.94, 81.23, 98.61, 92.15, 103.50, 96.84, 106.20, 99.57,
    28.35, 26.57, 62.21, 58.50, 89.87, 83.82, 101.78, 95.29, 106.86, 100.15,
    109.69, 102.99, 28.60, 26.91, 62.97, 59.11, 90.35, 83.43, 102.59, 96.51,
    107.82, 101.43, 110.87, 104.24, 28.03, 26.25, 61.61, 57.32, 87.10, 80.08,
    100.55, 94.22, 105.68, 98.92, 108.63, 101.44, 28.92, 27.03, 63.50, 58.96,
    89.52, 82.31, 103.74, 97.04, 109.01, 101.86, 112.02, 104.40, 29.12, 26.95,
    63.57, 58.53, 88.77, 82.11, 104.55, 96.83, 109.75, 101.53, 112.52, 103.86,
    28.19, 25.92, 61.24, 56.34, 85.81, 80.19, 101.28, 93.16, 106.19, 97.65,
    108.65, 99.89, 28.92, 26.59, 62.80, 57.83, 88.18, 82.55, 103.91, 95.54,
    108.94, 100.16, 111.44, 102.48, 28.67, 26.47, 62.34, 57.92, 88.85, 83.58,
    103.03, 95.05, 108.01, 99.73, 110.50, 102.27, 27.72, 25.84, 60.61, 56.85,
    87.42, 81.92, 99.54, 92.72, 104.44, 97.41, 107.07, 100.11, 28.42, 26.55,
    62.23, 58.43, 89.85, 84.06, 102.06, 95.25, 107.10, 100.08, 109.85, 102.89,
    28.58, 26.87, 62.88, 59.12, 90.54, 83.87, 102.52, 96.38, 107.72, 101.31,
    110.72, 104.16, 8.10, 7.61, 17.82, 16.66, 25.37, 23.35, 29.04, 27.29,
    30.53, 28.67, 31.39, 29.43, 22.92, 21.50, 50.42, 47.04, 71.57, 65.82,
    82.20, 77.17, 86.40, 81.04, 88.84, 83.16, 23.95, 22.27, 52.43, 48.43,
    73.43, 67.67, 85.95, 79.97, 90.27, 83.89, 92.66, 85.88, 19.02, 17.53,
    41.39, 38.06, 57.82, 53.78, 68.32, 62.99, 71.67, 66.02, 73.39, 67.52,
    24.97, 22.98, 54.29, 49.92, 75.91, 70.74, 89.69, 82.60, 94.07, 86.58,
    96.29, 88.54, 25.14, 23.14, 54.60, 50.49, 77.26, 72.59, 90.36, 83.14,
    94.71, 87.19, 96.86, 89.31, 21.44, 19.90, 46.75, 43.68, 67.14, 63.09,
    77.03, 71.41, 80.78, 74.98, 82.72, 76.99, 25.16, 23.39, 54.92, 51.40,
    79.03, 74.19, 90.36, 83.93, 94.78, 88.16, 97.10, 90.56, 25.40, 23.83,
    55.79, 52.48, 80.57, 74.97, 91.16, 85.49, 95.73, 89.85, 98.32, 92.41,
    22.92, 21.56, 50.48, 47.31, 72.21, 66.58, 82.22, 77.34, 86.41, 81.26,
    88.87, 83.49, 25.75, 24.20, 56.69, 53.05, 80.88, 74.49, 92.35, 86.83,
    97.07, 91.22, 99.83, 93.68, 26.20, 24.44, 57.47, 53.25, 80.79, 74.33,
    94.01, 87.76, 98.77, 92.09, 101.45, 94.35, 24.08, 22.24, 52.49, 48.29,
    73.27, 67.91, 86.46, 79.92, 90.74, 83.78, 92.98, 85.69, 26.30, 24.25,
    57.27, 52.66, 79.95, 74.25, 94.44, 87.16, 99.09, 91.36, 101.49, 93.44,
    26.26, 24.15, 57.02, 52.58, 80.29, 75.29, 94.38, 86.77, 98.93, 90.97,
    101.18, 93.11, 24.17, 22.35, 52.60, 48.98, 75.21, 70.75, 86.85, 80.26,
    91.05, 84.24, 93.18, 86.43, 25.94, 24.03, 56.51, 52.72, 81.01, 76.17,
    93.20, 86.27, 97.72, 90.58, 100.04, 92.97, 25.97, 24.31, 56.93, 53.51,
    82.25, 76.79, 93.22, 87.18, 97.86, 91.62, 100.43, 94.21, 24.54, 23.09,
    54.03, 50.75, 77.63, 71.76, 88.04, 82.81, 92.52, 87.04, 95.12, 89.47,
    26.14, 24.59, 57.55, 53.99, 82.49, 76.14, 93.75, 88.20, 98.53, 92.68,
    101.32, 95.24, 26.52, 24.82, 58.28, 54.18, 82.30, 75.66, 95.14, 89.09,
    99.99, 93.53, 102.77, 95.89, 25.28, 23.42, 55.22, 50.88, 77.15, 71.29,
    90.75, 84.14, 95.27, 88.23, 97.71, 90.28, 26.66, 24.65, 58.16, 53.53,
    81.20, 75.16, 95.70, 88.58, 100.46, 92.87, 102.97, 94.99, 26.63, 24.48,
    57.84, 53.23, 81.11, 75.84, 95.67, 87.99, 100.31, 92.23, 102.62, 94.36,
    25.12, 23.17, 54.60, 50.66, 77.67, 73.06, 90.28, 83.21, 94.64, 87.30,
    96.80, 89.50, 26.27, 24.27, 57.14, 53.12, 81.52, 76.69, 94.40, 87.13,
    98.96, 91.44, 101.25, 93.78, 26.18, 24.43, 57.28, 53.75, 82.65, 77.40,
    94.02, 87.64, 98.65, 92.08, 101.15, 94.64, 25.14, 23.63, 55.30, 52.01,
    79.71, 73.92, 90.21, 84.77, 94.77, 89.10, 97.40, 91.62, 26.25, 24.69,
    57.77, 54.30, 83.13, 76.95, 94.18, 88.56, 98.96, 93.08, 101.73, 95.70,
    26.60, 24.95, 58.52, 54.58, 83.05, 76.38, 95.40, 89.55, 100.27, 94.05,
    103.10, 96.51, 25.79, 23.98, 56.46, 52.15, 79.07, 72.87, 92.56, 86.12,
    97.22, 90.33, 99.78, 92.48, 26.80, 24.87, 58.60, 54.05, 81.95, 75.63,
    96.20, 89.33, 101.02, 93.68, 103.64, 95.87, 26.83, 24.69, 58.33, 53.63,
    81.56, 76.01, 96.37, 88.74, 101.07, 93.01, 103.45, 95.13, 25.65, 23.61,
    55.69, 51.50, 78.81, 74.05, 92.17, 84.80, 96.61, 88.94, 98.80, 91.10,
    26.49, 24.41, 57.55, 53.32, 81.68, 76.80, 95.20, 87.67, 99.79, 91.96,
    102.06, 94.24, 26.32, 24.47, 57.46, 53.78, 82.70, 77.63, 94.55, 87.82,
    99.17, 92.24, 101.60, 94.76, 25.45, 23.88, 55.90, 52.59, 80.73, 75.12,
    91.34, 85.66, 95.93, 90.04, 98.52, 92.60, 26.29, 24.70, 57.81, 54.38,
    83.40, 77.46, 94.35, 88.60, 99.11, 93.13, 101.83, 95.77, 26.59, 24.99,
    58.55, 54.78, 83.52, 76.92, 95.37, 89.67, 100.25, 94.21, 103.10, 96.74,
    26.05, 24.29, 57.13, 52.93, 80.30, 73.88, 93.45, 87.24, 98.18, 91.54,
    100.85, 93.78, 26.86, 25.00, 58.84, 54.41, 82.52, 75.99, 96.36, 89.79,
    101.23, 94.20, 103.93, 96.46, 26.95, 24.85, 58.68, 53.95, 81.92, 76.08,
    96.77, 89.31, 101.54, 93.62, 104.00, 95.74, 26.00, 23.91, 56.44, 52.06,
    79.49, 74.53, 93.43, 85.90, 97.94, 90.06, 100.16, 92.18, 26.66, 24.53,
    57.89, 53.47, 81.75, 76.75, 95.82, 88.12, 100.44, 92.41, 102.72, 94.62,
    26.45, 24.50, 57.62, 53.75, 82.60, 77.66, 95.02, 87.96, 99.63, 92.35,
    101.99, 94.79, 25.65, 24.01, 56.24, 52.86, 81.24, 75.86, 92.09, 86.12,
    96.67, 90.51, 99.20, 93.07, 26.32, 24.68, 57.77, 54.34, 83.46, 77.78,
    94.48, 88.51, 99.21, 93.03, 101.85, 95.67, 26.56, 24.98, 58.47, 54.86,
    83.81, 77.35, 95.25, 89.61, 100.11, 94.17, 102.94, 96.77, 8.71, 8.17,
    19.13, 18.00, 27.61, 25.67, 31.24, 29.32, 32.81, 30.82, 33.71, 31.69,
    24.62, 23.14, 54.14, 50.92, 78.05, 72.40, 88.32, 82.98, 92.79, 87.23,
    95.35, 89.70, 25.76, 24.19, 56.70, 53.00, 80.74, 74.31, 92.38, 86.81,
    97.10, 91.19, 99.85, 93.63, 20.65, 19.24, 45.26, 41.88, 63.53, 58.48,
    74.08, 69.08, 77.83, 72.48, 79.92, 74.23, 27.16, 25.25, 59.46, 54.93,
    83.30, 76.76, 97.47, 90.71, 102.38, 95.15, 105.08, 97.41, 27.61, 25.45,
    60.09, 55.25, 83.93, 78.04, 99.17, 91.44, 104.04, 95.85, 106.53, 98.02,
    23.58, 21.69, 51.20, 47.26, 72.22, 67.78, 84.75, 77.93, 88.84, 81.71,
    90.85, 83.66, 27.65, 25.44, 60.03, 55.50, 84.92, 79.78, 99.35, 91.40,
    104.14, 95.86, 106.50, 98.18, 27.66, 25.66, 60.31, 56.33, 86.59, 81.37,
    99.38, 92.11, 104.22, 96.72, 106.72, 99.30, 24.70, 23.14, 54.19, 50.96,
    78.29, 73.01, 88.66, 83.00, 93.09, 87.24, 95.55, 89.71, 27.71, 25.99,
    60.85, 57.24, 87.88, 81.79, 99.43, 93.23, 104.42, 98.00, 107.24, 100.78,
    28.13, 26.46, 61.95, 58.07, 88.66, 81.76, 100.91, 94.92, 106.06, 99.75,
    109.07, 102.48, 26.04, 24.34, 57.19, 53.10, 80.62, 74.13, 93.42, 87.39,
    98.18, 91.73, 100.88, 94.02, 28.50, 26.59, 62.52, 57.94, 87.91, 80.87,
    102.25, 95.48, 107.43, 100.19, 110.36, 102.65, 28.77, 26.58, 62.72, 57.70,
    87.55, 81.13, 103.29, 95.49, 108.40, 100.11, 111.09, 102.39, 26.60, 24.46,
    57.76, 53.20, 81.12, 75.93, 95.58, 87.88, 100.21, 92.13, 102.50, 94.26,
    28.54, 26.24, 61.97, 57.14, 87.23, 81.78, 102.57, 94.30, 107.52, 98.86,
    109.96, 101.19, 28.38, 26.25, 61.77, 57.50, 88.28, 83.05, 101.99, 94.23,
    106.93, 98.90, 109.42, 101.47, 26.53, 24.78, 58.08, 54.54, 83.86, 78.46,
    95.26, 88.90, 99.97, 93.41, 102.53, 96.03, 28.20, 26.39, 61.81, 58.10,
    89.30, 83.40, 101.23, 94.65, 106.27, 99.47, 109.05, 102.28, 28.47, 26.78,
    62.67, 58.87, 90.06, 83.27, 102.12, 96.05, 107.31, 100.95, 110.33, 103.78,
    27.25, 25.55, 59.93, 55.84, 84.91, 78.07, 97.75, 91.69, 102.74, 96.28,
    105.63, 98.77, 28.79, 26.94, 63.26, 58.82, 89.36, 82.16, 103.27, 96.72,
    108.53, 101.54, 111.55, 104.11, 29.07, 26.94, 63.51, 58.53, 88.75, 81.98,
    104.36, 96.79, 109.57, 101.49, 112.37, 103.84, 27.63, 25.42, 60.06, 55.23,
    84.05, 78.43, 99.27, 91.36, 104.11, 95.77, 106.54, 97.95, 28.91, 26.58,
    62.79, 57.79, 88.04, 82.31, 103.87, 95.53, 108.91, 100.14, 111.42, 102.44,
    28.71, 26.47, 62.38, 57.87, 88.71, 83.44, 103.16, 95.07, 108.13, 99.74,
    110.61, 102.24, 27.28, 25.39, 59.59, 55.83, 85.86, 80.54, 97.97, 91.12,
    102.77, 95.71, 105.32, 98.34, 28.42, 26.51, 62.16, 58.32, 89.69, 84.01,
    102.06, 95.11, 107.08, 99.92, 109.79, 102.71, 28.57, 26.85, 62.83, 59.09,
    90.58, 84.02, 102.50, 96.30, 107.68, 101.23, 110.66, 104.09, 27.74, 26.06,
    61.06, 57.07, 86.94, 80.02, 99.48, 93.49, 104.57, 98.21, 107.54, 100.83,
    28.86, 27.08, 63.50, 59.25, 90.16, 82.92, 103.52, 97.19, 108.81, 102.07,
    111.88, 104.74, 29.18, 27.13, 63.89, 59.02, 89.50, 82.47, 104.72, 97.46,
    110.00, 102.23, 112.90, 104.66, 28.17, 25.96, 61.29, 56.35, 85.61, 79.61,
    101.16, 93.27, 106.12, 97.77, 108.67, 99.99, 29.12, 26.81, 63.32, 58.22,
    88.53, 82.49, 104.61, 96.34, 109.72, 100.98, 112.31, 103.28, 28.93, 26.62,
    62.81, 58.08, 88.85, 83.48, 103.95, 95.64, 108.96, 100.30, 111.43, 102.73,
    27.72, 25.71, 60.43, 56.45, 86.76, 81.54, 99.58, 92.29, 104.42, 96.91,
    106.93, 99.51, 28.57, 26.56, 62.37, 58.36, 89.74, 84.25, 102.64, 95.32,
    107.65, 100.11, 110.28, 102.83, 28.61, 26.84, 62.83, 59.11, 90.75, 84.47,
    102.68, 96.28, 107.83, 101.20, 110.74, 104.08, 27.97, 26.30, 61.58, 57.73,
    88.13, 81.26, 100.31, 94.36, 105.43, 99.15, 108.43, 101.87, 28.86, 27.12,
    63.54, 59.46, 90.67, 83.51, 103.50, 97.32, 108.79, 102.24, 111.88, 105.00,
    29.21, 27.25, 64.06, 59.36, 90.08, 82.87, 104.78, 97.84, 110.09, 102.66,
    113.08, 105.18, 28.48, 26.31, 62.09, 57.12, 86.67, 80.31, 102.26, 94.53,
    107.32, 99.10, 109.97, 101.36, 29.25, 26.98, 63.71, 58.58, 88.94, 82.58,
    105.05, 96.96, 110.23, 101.64, 112.90, 103.95, 29.10, 26.76, 63.18, 58.25,
    88.94, 83.38, 104.57, 96.14, 109.62, 100.79, 112.11, 103.16, 28.04, 25.93,
    61.01, 56.80, 87.21, 82.04, 100.75, 93.08, 105.62, 97.70, 108.08, 100.23,
    28.71, 26.60, 62.55, 58.34, 89.64, 84.29, 103.16, 95.48, 108.17, 100.24,
    110.73, 102.89, 28.65, 26.81, 62.80, 59.03, 90.73, 84.73, 102.85, 96.17,
    107.96, 101.07, 110.79, 103.92, 8.78, 8.26, 19.32, 18.16, 27.80, 25.73,
    31.49, 29.62, 33.09, 31.13, 34.02, 32.00, 24.84, 23.37, 54.68, 51.35,
    78.52, 72.56, 89.10, 83.81, 93.63, 88.09, 96.27, 90.54, 26.01, 24.37,
    57.19, 53.24, 80.93, 74.41, 93.31, 87.47, 98.07, 91.84, 100.81, 94.20,
    20.81, 19.30, 45.49, 41.95, 63.61, 58.70, 74.67, 69.34, 78.41, 72.72,
    80.44, 74.42, 27.35, 25.33, 59.72, 55.01, 83.42, 77.11, 98.17, 90.99,
    103.07, 95.40, 105.69, 97.61, 27.70, 25.48, 60.18, 55.36, 84.28, 78.70,
    99.51, 91.55, 104.35, 95.97, 106.77, 98.16, 23.61, 21.76, 51.29, 47.52,
    72.80, 68.46, 84.85, 78.14, 88.94, 81.97, 90.97, 84.00, 27.68, 25.54,
    60.17, 55.86, 85.66, 80.58, 99.47, 91.71, 104.27, 96.23, 106.66, 98.66,
    27.76, 25.86, 60.67, 56.87, 87.46, 82.00, 99.69, 92.78, 104.58, 97.47,
    107.19, 100.16, 24.88, 23.37, 54.69, 51.45, 78.91, 73.29, 89.28, 83.83,
    93.78, 88.11, 96.35, 90.61, 27.93, 26.26, 61.44, 57.77, 88.52, 82.05,
    100.20, 94.17, 105.27, 98.98, 108.19, 101.78, 28.42, 26.68, 62.54, 58.42,
    88.96, 81.86, 101.92, 95.75, 107.13, 100.57, 110.17, 103.24, 26.27, 24.46,
    57.55, 53.22, 80.72, 74.33, 94.26, 87.83, 99.02, 92.14, 101.67, 94.35,
    28.73, 26.69, 62.87, 58.05, 88.01, 81.14, 103.11, 95.88, 108.29, 100.57,
    111.13, 102.95, 28.89, 26.61, 62.85, 57.78, 87.81, 81.72, 103.77, 95.63,
    108.85, 100.24, 111.45, 102.52, 26.64, 24.51, 57.84, 53.42, 81.67, 76.68,
    95.74, 88.05, 100.35, 92.33, 102.63, 94.54, 28.58, 26.31, 62.06, 57.42,
    87.90, 82.61, 102.71, 94.52, 107.65, 99.13, 110.10, 101.55, 28.45, 26.41,
    62.05, 58.00, 89.17, 83.77, 102.21, 94.80, 107.19, 99.55, 109.77, 102.23,
    26.69, 25.02, 58.57, 55.09, 84.62, 78.85, 95.79, 89.73, 100.58, 94.31,
    103.26, 96.99, 28.39, 26.65, 62.37, 58.67, 90.05, 83.75, 101.88, 95.58,
    107.00, 100.46, 109.90, 103.31, 28.74, 27.03, 63.29, 59.30, 90.48, 83.40,
    103.10, 96.97, 108.36, 101.88, 111.44, 104.66, 27.51, 25.70, 60.39, 56.03,
    85.05, 78.21, 98.70, 92.27, 103.71, 96.84, 106.56, 99.24, 29.05, 27.08,
    63.70, 58.99, 89.48, 82.34, 104.23, 97.26, 109.50, 102.05, 112.47, 104.53,
    29.24, 26.99, 63.71, 58.60, 88.93, 82.47, 104.98, 96.99, 110.16, 101.67,
    112.87, 103.99, 27.69, 25.46, 60.13, 55.40, 84.52, 79.16, 99.51, 91.49,
    104.32, 95.91, 106.70, 98.15, 28.96, 26.63, 62.87, 58.00, 88.60, 83.11,
    104.07, 95.68, 109.09, 100.32, 111.56, 102.69, 28.75, 26.60, 62.59, 58.31,
    89.56, 84.24, 103.31, 95.51, 108.31, 100.26, 110.85, 102.88, 27.40, 25.62,
    60.02, 56.39, 86.69, 81.05, 98.39, 91.89, 103.26, 96.56, 105.93, 99.28,
    28.57, 26.75, 62.66, 58.91, 90.53, 84.48, 102.57, 95.97, 107.68, 100.86,
    110.51, 103.71, 28.82, 27.12, 63.46, 59.59, 91.12, 84.20, 103.40, 97.27,
    108.66, 102.22, 111.73, 105.07, 28.02, 26.24, 61.59, 57.34, 87.15, 80.13,
    100.48, 94.20, 105.61, 98.90, 108.57, 101.44, 29.15, 27.26, 64.02, 59.48,
    90.33, 83.05, 104.54, 97.85, 109.87, 102.72, 112.91, 105.30, 29.39, 27.21,
    64.16, 59.10, 89.62, 82.85, 105.48, 97.76, 110.74, 102.50, 113.55, 104.87,
    28.25, 25.99, 61.39, 56.47, 85.97, 80.28, 101.50, 93.39, 106.44, 97.89,
    108.91, 100.13, 29.20, 26.84, 63.40, 58.37, 88.97, 83.23, 104.90, 96.46,
    109.98, 101.12, 112.51, 103.45, 28.96, 26.72, 62.96, 58.44, 89.63, 84.31,
    104.08, 95.96, 109.10, 100.69, 111.60, 103.23, 27.81, 25.91, 60.79, 56.98,
    87.63, 82.16, 99.88, 92.97, 104.79, 97.67, 107.41, 100.37, 28.69, 26.78,
    62.79, 58.94, 90.63, 84.84, 103.02, 96.08, 108.11, 100.96, 110.86, 103.78,
    28.84, 27.12, 63.45, 59.66, 91.41, 84.73, 103.47, 97.25, 108.71, 102.22,
    111.73, 105.11, 28.25, 26.52, 62.17, 58.07, 88.43, 81.36, 101.32, 95.18,
    106.50, 99.97, 109.51, 102.62, 29.15, 27.34, 64.12, 59.77, 90.92, 83.61,
    104.54, 98.10, 109.88, 103.02, 112.98, 105.70, 29.44, 27.35, 64.42, 59.48,
    90.18, 83.14, 105.65, 98.25, 110.96, 103.05, 113.88, 105.48, 28.60, 26.34,
    62.22, 57.20, 86.93, 80.90, 102.73, 94.67, 107.76, 99.23, 110.33, 101.49,
    29.36, 27.02, 63.82, 58.68, 89.27, 83.24, 105.46, 97.09, 110.60, 101.77,
    113.20, 104.08, 29.14, 26.83, 63.28, 58.55, 89.62, 84.22, 104.71, 96.36,
    109.75, 101.07, 112.25, 103.53, 28.10, 26.09, 61.30, 57.30, 88.08, 82.75,
    100.96, 93.64, 105.88, 98.34, 108.43, 100.98, 28.80, 26.79, 62.88, 58.88,
    90.55, 84.97, 103.43, 96.13, 108.49, 100.97, 111.17, 103.73, 28.84, 27.07,
    63.37, 59.61, 91.49, 85.09, 103.51, 97.11, 108.71, 102.07, 111.66, 104.97,
    8.27, 7.78, 18.20, 17.07, 26.07, 24.05, 29.65, 27.89, 31.16, 29.31,
    32.05, 30.12, 23.40, 22.00, 51.52, 48.23, 73.57, 67.78, 83.91, 78.91,
    88.20, 82.91, 90.71, 85.16, 24.49, 22.86, 53.74, 49.82, 75.61, 69.55,
    87.87, 82.09, 92.33, 86.14, 94.85, 88.26, 19.53, 18.04, 42.58, 39.18,
    59.44, 55.05, 70.10, 64.84, 73.58, 67.97, 75.41, 69.53, 25.65, 23.66,
    55.87, 51.38, 77.99, 72.38, 92.10, 85.04, 96.64, 89.14, 99.00, 91.17,
    25.89, 23.80, 56.20, 51.81, 79.07, 74.11, 93.02, 85.52, 97.52, 89.66,
    99.74, 91.76, 22.06, 20.39, 47.99, 44.65, 68.54, 64.48, 79.26, 73.20,
    83.09, 76.82, 85.02, 78.80, 25.86, 23.95, 56.33, 52.51, 80.67, 75.87,
    92.93, 85.97, 97.44, 90.25, 99.74, 92.63, 26.02, 24.34, 57.02, 53.58,
    82.36, 76.95, 93.41, 87.30, 98.05, 91.74, 100.60, 94.33, 23.41, 22.02,
    51.53, 48.41, 74.09, 68.53, 83.98, 78.98, 88.24, 83.01, 90.72, 85.34,
    26.29, 24.73, 57.89, 54.33, 83.04, 76.69, 94.30, 88.71, 99.11, 93.23,
    101.91, 95.82, 26.77, 25.06, 58.84, 54.73, 83.17, 76.46, 96.02, 89.97,
    100.92, 94.45, 103.74, 96.86, 24.69, 22.88, 53.94, 49.72, 75.39, 69.62,
    88.60, 82.21, 93.03, 86.21, 95.42, 88.21, 26.98, 24.96, 58.88, 54.22,
    82.22, 76.06, 96.85, 89.69, 101.67, 94.04, 104.23, 96.20, 27.03, 24.85,
    58.71, 54.02, 82.28, 76.89, 97.10, 89.32, 101.82, 93.62, 104.17, 95.77,
    24.88, 22.94, 54.06, 50.13, 76.82, 72.25, 89.41, 82.38, 93.72, 86.42,
    95.86, 88.57, 26.69, 24.64, 58.04, 53.92, 82.72, 77.82, 95.92, 88.49,
    100.55, 92.85, 102.87, 95.21, 26.63, 24.83, 58.24, 54.63, 84.01, 78.72,
    95.65, 89.10, 100.36, 93.61, 102.88, 96.20, 25.08, 23.57, 55.16, 51.88,
    79.54, 73.81, 90.00, 84.54, 94.54, 88.86, 97.15, 91.38, 26.70, 25.11,
    58.75, 55.23, 84.59, 78.35, 95.79, 90.05, 100.64, 94.65, 103.45, 97.32,
    27.08, 25.42, 59.59, 55.63, 84.67, 77.88, 97.13, 91.22, 102.10, 95.80,
    104.99, 98.32, 25.88, 24.08, 56.68, 52.38, 79.43, 73.17, 92.87, 86.47,
    97.55, 90.71, 100.14, 92.87, 27.31, 25.36, 59.73, 55.12, 83.57, 77.09,
    98.02, 91.08, 102.93, 95.52, 105.62, 97.77, 27.38, 25.21, 59.55, 54.75,
    83.22, 77.51, 98.35, 90.60, 103.16, 94.96, 105.60, 97.12, 25.87, 23.80,
    56.17, 51.91, 79.40, 74.58, 92.96, 85.51, 97.44, 89.68, 99.65, 91.84,
    27.05, 24.91, 58.75, 54.39, 83.29, 78.30, 97.20, 89.48, 101.88, 93.86,
    104.20, 96.16, 26.89, 24.98, 58.67, 54.88, 84.38, 79.24, 96.59, 89.66,
    101.30, 94.16, 103.77, 96.71, 25.72, 24.13, 56.48, 53.13, 81.58, 75.96,
    92.32, 86.53, 96.94, 90.95, 99.55, 93.54, 26.84, 25.21, 58.99, 55.49,
    85.14, 79.12, 96.31, 90.40, 101.16, 95.02, 103.92, 97.72, 27.15, 25.53,
    59.78, 55.97, 85.37, 78.65, 97.38, 91.58, 102.36, 96.22, 105.27, 98.82,
    26.38, 24.62, 57.87, 53.65, 81.42, 74.89, 94.63, 88.40, 99.43, 92.77,
    102.14, 95.05, 27.43, 25.55, 60.11, 55.63, 84.37, 77.67, 98.41, 91.76,
    103.38, 96.27, 106.16, 98.60, 27.56, 25.42, 60.02, 55.20, 83.79, 77.76,
    98.95, 91.36, 103.83, 95.77, 106.36, 97.95, 26.41, 24.28, 57.33, 52.85,
    80.66, 75.60, 94.89, 87.23, 99.47, 91.46, 101.74, 93.60, 27.28, 25.09,
    59.22, 54.67, 83.54, 78.40, 98.02, 90.13, 102.75, 94.51, 105.08, 96.76,
    27.06, 25.06, 58.94, 54.95, 84.42, 79.39, 97.24, 89.96, 101.95, 94.44,
    104.36, 96.92, 26.07, 24.39, 57.13, 53.69, 82.53, 77.11, 93.60, 87.48,
    98.24, 91.93, 100.80, 94.52, 26.91, 25.22, 59.05, 55.53, 85.31, 79.56,
    96.61, 90.45, 101.43, 95.07, 104.12, 97.76, 27.15, 25.54, 59.78, 56.11,
    85.75, 79.19, 97.38, 91.62, 102.35, 96.28, 105.24, 98.95, 26.61, 24.91,
    58.49, 54.41, 82.67, 76.00, 95.45, 89.43, 100.32, 93.89, 103.12, 96.28,
    27.45, 25.66, 60.28, 55.96, 84.96, 78.13, 98.47, 92.11, 103.48, 96.68,
    106.34, 99.10, 27.64, 25.58, 60.33, 55.55, 84.25, 77.94, 99.24, 91.91,
    104.18, 96.36, 106.80, 98.58, 26.76, 24.60, 58.12, 53.48, 81.45, 76.12,
    96.13, 88.42, 100.79, 92.68, 103.12, 94.81, 27.45, 25.24, 59.60, 54.89,
    83.71, 78.36, 98.63, 90.68, 103.40, 95.06, 105.77, 97.27, 27.21, 25.12,
    59.17, 54.97, 84.34, 79.34, 97.79, 90.22, 102.51, 94.67, 104.88, 97.07,
    26.31, 24.53, 57.53, 53.96, 82.99, 77.76, 94.48, 88.01, 99.13, 92.47,
    101.63, 95.03, 26.98, 25.20, 59.07, 55.47, 85.29, 79.79, 96.87, 90.41,
    101.66, 95.00, 104.27, 97.67, 27.13, 25.51, 59.69, 56.11, 85.94, 79.60,
    97.32, 91.49, 102.25, 96.17, 105.10, 98.88, 8.77, 8.21, 19.24, 18.09,
    27.79, 25.94, 31.49, 29.46, 33.06, 30.97, 33.93, 31.84, 24.79, 23.25,
    54.42, 51.19, 78.61, 73.22, 88.97, 83.38, 93.43, 87.64, 95.93, 90.13,
    25.88, 24.34, 56.99, 53.44, 81.62, 75.31, 92.82, 87.32, 97.56, 91.76,
    100.33, 94.29, 20.77, 19.42, 45.62, 42.39, 64.38, 59.19, 74.50, 69.73,
    78.29, 73.20, 80.46, 75.04, 27.34, 25.52, 59.99, 55.63, 84.42, 77.65,
    98.07, 91.63, 103.04, 96.16, 105.86, 98.54, 27.89, 25.78, 60.83, 55.98,
    84.92, 78.64, 100.14, 92.64, 105.11, 97.12, 107.73, 99.34, 23.89, 21.97,
    51.89, 47.77, 72.81, 68.11, 85.84, 78.94, 90.00, 82.75, 92.07, 84.66,
    28.01, 25.76, 60.82, 56.06, 85.55, 80.16, 100.67, 92.55, 105.53, 97.03,
    107.94, 99.30, 28.01, 25.88, 60.93, 56.68, 87.01, 81.85, 100.65, 92.94,
    105.51, 97.54, 107.96, 100.05, 24.92, 23.27, 54.54, 51.20, 78.73, 73.70,
    89.49, 83.47, 93.91, 87.70, 96.30, 90.15, 27.93, 26.13, 61.21, 57.51,
    88.41, 82.62, 100.29, 93.71, 105.27, 98.48, 108.00, 101.26, 28.28, 26.60,
    62.25, 58.49, 89.52, 82.82, 101.45, 95.41, 106.61, 100.28, 109.60, 103.10,
    26.18, 24.55, 57.58, 53.68, 81.66, 75.09, 93.89, 88.10, 98.69, 92.52,
    101.47, 94.93, 28.66, 26.84, 62.99, 58.61, 89.07, 81.89, 102.79, 96.32,
    108.03, 101.13, 111.05, 103.71, 29.02, 26.91, 63.43, 58.48, 88.67, 81.86,
    104.17, 96.68, 109.38, 101.38, 112.20, 103.74, 26.93, 24.78, 58.54, 53.83,
    81.88, 76.36, 96.74, 89.06, 101.46, 93.35, 103.84, 95.47, 28.91, 26.59,
    62.80, 57.78, 87.99, 82.21, 103.86, 95.54, 108.90, 100.14, 111.42, 102.44,
    28.76, 26.51, 62.48, 57.92, 88.76, 83.47, 103.35, 95.20, 108.33, 99.87,
    110.80, 102.36, 26.80, 24.93, 58.53, 54.81, 84.28, 79.09, 96.27, 89.48,
    100.99, 93.98, 103.47, 96.55, 28.47, 26.54, 62.25, 58.37, 89.77, 84.13,
    102.24, 95.22, 107.27, 100.03, 109.96, 102.80, 28.64, 26.91, 62.97, 59.23,
    90.82, 84.30, 102.75, 96.51, 107.94, 101.45, 110.91, 104.32, 27.38, 25.73,
    60.29, 56.38, 85.93, 79.12, 98.22, 92.32, 103.24, 96.99, 106.17, 99.59,
    28.93, 27.16, 63.67, 59.44, 90.49, 83.24, 103.77, 97.45, 109.07, 102.36,
    112.15, 105.06, 29.29, 27.25, 64.16, 59.30, 89.93, 82.84, 105.11, 97.89,
    110.41, 102.69, 113.35, 105.14, 27.95, 25.77, 60.84, 55.94, 84.95, 78.94,
    100.37, 92.59, 105.30, 97.06, 107.84, 99.26, 29.26, 26.94, 63.63, 58.50,
    88.92, 82.80, 105.08, 96.81, 110.22, 101.48, 112.84, 103.78, 29.09, 26.77,
    63.17, 58.37, 89.27, 83.84, 104.55, 96.17, 109.59, 100.85, 112.07, 103.27,
    27.59, 25.58, 60.13, 56.13, 86.26, 81.09, 99.13, 91.82, 103.95, 96.40,
    106.43, 98.97, 28.73, 26.69, 62.68, 58.62, 90.12, 84.65, 103.20, 95.77,
    108.23, 100.58, 110.86, 103.30, 28.77, 26.98, 63.16, 59.41, 91.23, 84.97,
    103.25, 96.76, 108.42, 101.70, 111.33, 104.59, 27.87, 26.22, 61.37, 57.55,
    87.90, 81.09, 99.97, 94.04, 105.07, 98.82, 108.05, 101.54, 29.00, 27.26,
    63.85, 59.79, 91.21, 84.04, 104.01, 97.81, 109.32, 102.77, 112.43, 105.56,
    29.37, 27.42, 64.45, 59.76, 90.70, 83.42, 105.37, 98.45, 110.72, 103.32,
    113.74, 105.87, 28.45, 26.30, 62.05, 57.10, 86.62, 80.22, 102.15, 94.49,
    107.22, 99.07, 109.89, 101.33, 29.44, 27.17, 64.13, 58.98, 89.52, 83.07,
    105.71, 97.62, 110.93, 102.34, 113.64, 104.66, 29.31, 26.95, 63.64, 58.66,
    89.51, 83.88, 105.33, 96.83, 110.42, 101.52, 112.93, 103.89, 28.07, 25.94,
    61.06, 56.80, 87.18, 82.02, 100.85, 93.12, 105.72, 97.73, 108.18, 100.25,
    28.92, 26.77, 62.97, 58.69, 90.16, 84.79, 103.90, 96.10, 108.93, 100.88,
    111.50, 103.53, 28.85, 26.98, 63.21, 59.40, 91.30, 85.32, 103.57, 96.78,
    108.71, 101.70, 111.53, 104.57, 28.11, 26.44, 61.88, 58.14, 88.99, 82.33,
    100.85, 94.85, 105.97, 99.69, 108.95, 102.48, 29.00, 27.28, 63.85, 59.94,
    91.62, 84.62, 104.02, 97.86, 109.32, 102.84, 112.41, 105.70, 29.37, 27.50,
    64.55, 60.06, 91.26, 83.91, 105.33, 98.70, 110.71, 103.63, 113.80, 106.27,
    28.73, 26.64, 62.79, 57.89, 87.77, 81.04, 103.12, 95.71, 108.28, 100.36,
    111.07, 102.70, 29.54, 27.33, 64.47, 59.37, 90.03, 83.27, 106.02, 98.21,
    111.30, 102.97, 114.11, 105.34, 29.47, 27.10, 64.03, 58.91, 89.71, 83.82,
    105.89, 97.40, 111.03, 102.10, 113.60, 104.44, 28.41, 26.18, 61.72, 57.22,
    87.68, 82.46, 102.08, 94.04, 107.00, 98.65, 109.45, 101.11, 29.08, 26.84,
    63.23, 58.73, 90.09, 84.75, 104.51, 96.39, 109.55, 101.15, 112.07, 103.71,
    28.92, 26.96, 63.24, 59.31, 91.21, 85.48, 103.87, 96.74, 108.98, 101.63,
    111.72, 104.45, 8.83, 8.29, 19.40, 18.25, 27.99, 26.02, 31.67, 29.72,
    33.26, 31.24, 34.17, 32.13, 24.96, 23.46, 54.89, 51.62, 79.12, 73.39,
    89.54, 84.13, 94.07, 88.43, 96.67, 90.94, 26.11, 24.53, 57.48, 53.72,
    81.84, 75.32, 93.65, 88.01, 98.44, 92.45, 101.23, 94.91, 20.93, 19.50,
    45.88, 42.45, 64.39, 59.28, 75.11, 70.03, 78.90, 73.47, 81.02, 75.25,
    27.54, 25.60, 60.28, 55.69, 84.44, 77.81, 98.81, 91.95, 103.78, 96.45,
    106.53, 98.74, 27.99, 25.79, 60.91, 56.00, 85.07, 79.12, 100.53, 92.69,
    105.46, 97.16, 107.99, 99.36, 23.91, 21.99, 51.90, 47.91, 73.21, 68.71,
    85.91, 78.99, 90.05, 82.83, 92.09, 84.80, 28.02, 25.79, 60.85, 56.27,
    86.09, 80.88, 100.71, 92.65, 105.56, 97.17, 107.96, 99.53, 28.04, 26.02,
    61.14, 57.11, 87.78, 82.50, 100.74, 93.37, 105.64, 98.05, 108.18, 100.67,
    25.04, 23.46, 54.94, 51.66, 79.37, 74.01, 89.88, 84.15, 94.37, 88.44,
    96.87, 90.95, 28.09, 26.35, 61.68, 58.03, 89.09, 82.91, 100.80, 94.52,
    105.86, 99.35, 108.71, 102.17, 28.52, 26.83, 62.81, 58.87, 89.87, 82.87,
    102.31, 96.23, 107.53, 101.12, 110.58, 103.89, 26.40, 24.68, 57.98, 53.82,
    81.72, 75.14, 94.71, 88.59, 99.53, 92.99, 102.27, 95.31, 28.89, 26.95,
    63.38, 58.73, 89.11, 81.98, 103.66, 96.79, 108.91, 101.56, 111.87, 104.05,
    29.16, 26.94, 63.58, 58.49, 88.74, 82.24, 104.71, 96.80, 109.89, 101.48,
    112.61, 103.79, 26.96, 24.79, 58.55, 53.93, 82.23, 76.98, 96.89, 89.08,
    101.58, 93.39, 103.90, 95.55, 28.93, 26.60, 62.81, 57.92, 88.43, 82.91,
    103.97, 95.58, 108.99, 100.21, 111.46, 102.57, 28.77, 26.61, 62.61, 58.29,
    89.50, 84.19, 103.39, 95.52, 108.39, 100.26, 110.92, 102.86, 26.89, 25.12,
    58.88, 55.30, 85.02, 79.54, 96.56, 90.13, 101.34, 94.70, 103.94, 97.36,
    28.59, 26.75, 62.66, 58.90, 90.53, 84.54, 102.62, 95.96, 107.73, 100.85,
    110.55, 103.70, 28.86, 27.15, 63.53, 59.68, 91.29, 84.41, 103.53, 97.38,
    108.79, 102.35, 111.86, 105.21, 27.63, 25.90, 60.76, 56.60, 86.07, 79.14,
    99.10, 92.95, 104.16, 97.60, 107.09, 100.12, 29.19, 27.31, 64.13, 59.63,
    90.58, 83.28, 104.69, 98.05, 110.03, 102.93, 113.09, 105.54, 29.47, 27.31,
    64.38, 59.33, 89.96, 83.11, 105.79, 98.11, 111.07, 102.88, 113.91, 105.26,
    28.01, 25.77, 60.88, 55.99, 85.20, 79.51, 100.63, 92.61, 105.53, 97.07,
    107.99, 99.29, 29.31, 26.95, 63.65, 58.58, 89.25, 83.44, 105.29, 96.83,
    110.40, 101.50, 112.94, 103.84, 29.10, 26.83, 63.24, 58.67, 89.94, 84.59,
    104.57, 96.37, 109.61, 101.11, 112.12, 103.64, 27.65, 25.74, 60.41, 56.60,
    87.04, 81.65, 99.31, 92.37, 104.18, 97.03, 106.77, 99.70, 28.81, 26.87,
    63.02, 59.13, 90.93, 85.17, 103.45, 96.42, 108.55, 101.30, 111.30, 104.12,
    28.96, 27.22, 63.70, 59.91, 91.82, 85.17, 103.91, 97.64, 109.16, 102.63,
    112.18, 105.53, 28.12, 26.41, 61.90, 57.85, 88.13, 81.11, 100.86, 94.78,
    106.01, 99.56, 109.02, 102.21, 29.26, 27.45, 64.38, 60.06, 91.39, 84.06,
    104.95, 98.52, 110.31, 103.47, 113.43, 106.18, 29.59, 27.51, 64.76, 59.83,
    90.72, 83.60, 106.17, 98.79, 111.51, 103.63, 114.46, 106.09, 28.55, 26.31,
    62.13, 57.12, 86.78, 80.70, 102.54, 94.55, 107.58, 99.10, 110.15, 101.35,
    29.52, 27.17, 64.19, 59.02, 89.74, 83.63, 106.04, 97.65, 111.22, 102.36,
    113.84, 104.69, 29.32, 26.99, 63.67, 58.87, 90.08, 84.63, 105.37, 96.95,
    110.45, 101.67, 112.95, 104.14, 28.10, 26.07, 61.26, 57.22, 87.96, 82.66,
    100.94, 93.56, 105.85, 98.24, 108.39, 100.88, 28.96, 26.93, 63.22, 59.17,
    90.98, 85.41, 104.04, 96.63, 109.13, 101.49, 111.80, 104.25, 29.00, 27.22,
    63.70, 59.93, 92.00, 85.62, 104.10, 97.61, 109.32, 102.60, 112.27, 105.51,
    28.35, 26.67, 62.44, 58.52, 89.33, 82.37, 101.70, 95.66, 106.89, 100.52,
    109.92, 103.27, 29.26, 27.50, 64.41, 60.28, 91.91, 84.65, 104.93, 98.66,
    110.29, 103.65, 113.43, 106.45, 29.61, 27.62, 64.94, 60.18, 91.30, 84.00,
    106.22, 99.18, 111.61, 104.07, 114.64, 106.62, 28.87, 26.67, 62.94, 57.90,
    87.85, 81.42, 103.66, 95.83, 108.79, 100.46, 111.48, 102.75, 29.65, 27.35,
    64.58, 59.38, 90.16, 83.72, 106.49, 98.29, 111.74, 103.03, 114.45, 105.37,
    29.50, 27.12, 64.04, 59.05, 90.16, 84.54, 105.99, 97.45, 111.11, 102.17,
    113.64, 104.57, 28.42, 26.28, 61.85, 57.58, 88.42, 83.17, 102.12, 94.36,
    107.06, 99.04, 109.56, 101.61, 29.11, 26.96, 63.41, 59.15, 90.88, 85.45,
    104.57, 96.79, 109.65, 101.62, 112.25, 104.31, 29.04, 27.18, 63.67, 59.84,
    91.98, 85.89, 104.26, 97.50, 109.45, 102.46, 112.31, 105.36, 8.38, 7.88,
    18.44, 17.33, 26.53, 24.56, 30.06, 28.27, 31.59, 29.71, 32.47, 30.55,
    23.71, 22.30, 52.20, 49.01, 74.94, 69.25, 85.04, 80.00, 89.37, 84.08,
    91.90, 86.42, 24.83, 23.26, 54.59, 50.82, 77.24, 71.01, 89.06, 83.49,
    93.61, 87.66, 96.23, 89.91, 19.86, 18.42, 43.41, 40.04, 60.70, 56.03,
    71.27, 66.18, 74.84, 69.40, 76.78, 71.02, 26.10, 24.17, 57.00, 52.50,
    79.61, 73.60, 93.70, 86.84, 98.37, 91.05, 100.87, 93.15, 26.44, 24.31,
    57.44, 52.84, 80.44, 75.12, 94.97, 87.38, 99.59, 91.59, 101.90, 93.68,
    22.53, 20.76, 48.96, 45.36, 69.49, 65.35, 80.98, 74.58, 84.89, 78.24,
    86.82, 80.17, 26.42, 24.37, 57.43, 53.31, 81.76, 76.91, 94.93, 87.53,
    99.51, 91.84, 101.80, 94.16, 26.49, 24.68, 57.90, 54.28, 83.48, 78.26,
    95.14, 88.56, 99.81, 93.03, 102.31, 95.61, 23.75, 22.31, 52.21, 49.11,
    75.32, 69.95, 85.21, 80.02, 89.51, 84.11, 91.97, 86.49, 26.66, 25.06,
    58.64, 55.14, 84.49, 78.31, 95.64, 89.89, 100.48, 94.48, 103.27, 97.15,
    27.13, 25.47, 59.70, 55.76, 84.91, 78.12, 97.29, 91.39, 102.26, 95.99,
    105.16, 98.54, 25.08, 23.34, 54.93, 50.80, 77.04, 70.94, 89.97, 83.83,
    94.51, 87.94, 97.04, 90.05, 27.42, 25.48, 60.00, 55.40, 84.00, 77.44,
    98.41, 91.51, 103.36, 95.98, 106.07, 98.25, 27.57, 25.40, 59.98, 55.15,
    83.81, 78.00, 99.04, 91.27, 103.89, 95.67, 106.36, 97.84, 25.43, 23.39,
    55.20, 50.99, 77.96, 73.20, 91.37, 84.03, 95.77, 88.12, 97.94, 90.23,
    27.28, 25.11, 59.23, 54.81, 83.90, 78.85, 98.02, 90.21, 102.74, 94.61,
    105.07, 96.92, 27.15, 25.21, 59.23, 55.36, 85.11, 79.96, 97.54, 90.48,
    102.30, 95.02, 104.77, 97.58, 25.47, 23.88, 55.91, 52.58, 80.77, 75.26,
    91.43, 85.65, 96.00, 90.02, 98.56, 92.58, 27.10, 25.44, 59.53, 56.00,
    85.95, 79.94, 97.24, 91.23, 102.13, 95.89, 104.90, 98.62, 27.44, 25.80,
    60.42, 56.60, 86.36, 79.59, 98.41, 92.56, 103.43, 97.25, 106.37, 99.90,
    26.26, 24.53, 57.64, 53.48, 81.17, 74.65, 94.21, 88.06, 99.00, 92.42,
    101.71, 94.71, 27.73, 25.85, 60.80, 56.30, 85.40, 78.59, 99.49, 92.82,
    104.52, 97.40, 107.35, 99.77, 27.90, 25.76, 60.80, 55.93, 84.87, 78.72,
    100.19, 92.57, 105.14, 97.04, 107.72, 99.24, 26.43, 24.30, 57.39, 52.88,
    80.67, 75.56, 94.97, 87.31, 99.56, 91.54, 101.83, 93.67, 27.64, 25.42,
    60.00, 55.36, 84.56, 79.33, 99.32, 91.32, 104.11, 95.75, 106.47, 98.01,
    27.44, 25.39, 59.74, 55.66, 85.49, 80.40, 98.60, 91.16, 103.37, 95.69,
    105.80, 98.19, 26.15, 24.45, 57.29, 53.82, 82.75, 77.36, 93.91, 87.71,
    98.56, 92.17, 101.11, 94.76, 27.27, 25.54, 59.81, 56.23, 86.41, 80.63,
    97.90, 91.60, 102.77, 96.27, 105.48, 99.00, 27.51, 25.88, 60.58, 56.88,
    86.97, 80.36, 98.69, 92.84, 103.72, 97.57, 106.65, 100.29, 26.74, 25.05,
    58.79, 54.72, 83.18, 76.47, 95.91, 89.91, 100.81, 94.40, 103.63, 96.82,
    27.82, 26.02, 61.11, 56.77, 86.21, 79.27, 99.79, 93.40, 104.87, 98.04,
    107.77, 100.50, 28.05, 25.97, 61.24, 56.40, 85.54, 79.07, 100.68, 93.30,
    105.69, 97.83, 108.38, 100.08, 26.96, 24.80, 58.59, 53.89, 82.05, 76.63,
    96.87, 89.12, 101.58, 93.42, 103.94, 95.56, 27.86, 25.62, 60.51, 55.71,
    84.91, 79.45, 100.11, 92.06, 104.96, 96.50, 107.37, 98.73, 27.64, 25.50,
    60.09, 55.78, 85.55, 80.48, 99.33, 91.59, 104.12, 96.10, 106.51, 98.53,
    26.54, 24.73, 58.02, 54.39, 83.65, 78.42, 95.33, 88.74, 100.01, 93.22,
    102.51, 95.80, 27.38, 25.56, 59.93, 56.26, 86.50, 80.97, 98.33, 91.71,
    103.18, 96.36, 105.81, 99.06, 27.53, 25.88, 60.56, 56.95, 87.25, 80.86,
    98.76, 92.83, 103.76, 97.57, 106.65, 100.33, 26.96, 25.32, 59.34, 55.43,
    84.40, 77.65, 96.71, 90.85, 101.65, 95.42, 104.53, 97.95, 27.82, 26.09,
    61.20, 57.05, 86.78, 79.80, 99.79, 93.64, 104.89, 98.33, 107.84, 100.89,
    28.10, 26.11, 61.49, 56.76, 86.07, 79.35, 100.85, 93.77, 105.91, 98.35,
    108.69, 100.67, 27.30, 25.14, 59.38, 54.59, 82.97, 77.22, 98.04, 90.35,
    102.85, 94.71, 105.29, 96.85, 28.02, 25.78, 60.91, 56.01, 85.20, 79.45,
    100.65, 92.66, 105.56, 97.12, 108.03, 99.33, 27.81, 25.60, 60.39, 55.88,
    85.54, 80.39, 99.93, 91.97, 104.75, 96.46, 107.12, 98.81, 26.82, 24.90,
    58.50, 54.69, 84.08, 78.99, 96.35, 89.38, 101.05, 93.86, 103.49, 96.39,
    27.48, 25.57, 60.02, 56.20, 86.43, 81.11, 98.72, 91.75, 103.55, 96.38,
    106.10, 99.01, 27.53, 25.84, 60.48, 56.90, 87.33, 81.21, 98.80, 92.69,
    103.76, 97.43, 106.58, 100.20, 8.83, 8.24, 19.32, 18.13, 27.88, 26.11,
    31.72, 29.56, 33.28, 31.06, 34.12, 31.92, 24.94, 23.31, 54.62, 51.30,
    78.88, 73.76, 89.54, 83.61, 93.97, 87.86, 96.40, 90.33, 25.95, 24.41,
    57.11, 53.68, 82.19, 76.09, 93.10, 87.54, 97.82, 92.01, 100.56, 94.60,
    20.82, 19.54, 45.81, 42.74, 65.03, 59.81, 74.68, 70.11, 78.49, 73.63,
    80.71, 75.55, 27.41, 25.68, 60.27, 56.12, 85.31, 78.44, 98.33, 92.19,
    103.35, 96.80, 106.24, 99.28, 28.06, 26.04, 61.35, 56.59, 85.80, 79.18,
    100.71, 93.53, 105.76, 98.09, 108.50, 100.39, 24.12, 22.20, 52.45, 48.22,
    73.33, 68.33, 86.65, 79.80, 90.88, 83.64, 93.02, 85.54, 28.30, 26.03,
    61.49, 56.56, 86.09, 80.38, 101.66, 93.54, 106.61, 98.05, 109.08, 100.29,
    28.31, 26.08, 61.50, 56.97, 87.27, 82.05, 101.74, 93.68, 106.64, 98.27,
    109.07, 100.70, 25.12, 23.36, 54.84, 51.32, 78.91, 74.09, 90.25, 83.81,
    94.66, 88.03, 96.97, 90.43, 28.14, 26.21, 61.50, 57.64, 88.65, 83.12,
    101.06, 94.05, 106.02, 98.80, 108.67, 101.53, 28.38, 26.66, 62.39, 58.69,
    90.03, 83.62, 101.85, 95.62, 106.98, 100.51, 109.91, 103.36, 26.24, 24.66,
    57.76, 54.06, 82.42, 75.91, 94.09, 88.47, 98.90, 92.95, 101.71, 95.45,
    28.72, 26.97, 63.22, 59.06, 89.95, 82.76, 103.02, 96.79, 108.29, 101.67,
    111.36, 104.36, 29.16, 27.15, 63.89, 59.10, 89.62, 82.52, 104.63, 97.51,
    109.92, 102.30, 112.86, 104.76, 27.16, 25.05, 59.15, 54.39, 82.57, 76.68,
    97.54, 90.02, 102.34, 94.37, 104.82, 96.51, 29.17, 26.88, 63.47, 58.35,
    88.67, 82.51, 104.79, 96.58, 109.92, 101.23, 112.54, 103.53, 29.07, 26.74,
    63.12, 58.29, 89.11, 83.66, 104.47, 96.08, 109.51, 100.75, 111.99, 103.16,
    27.05, 25.06, 58.93, 54.97, 84.46, 79.42, 97.19, 89.96, 101.91, 94.44,
    104.32, 96.94, 28.71, 26.65, 62.62, 58.52, 89.97, 84.53, 103.15, 95.66,
    108.18, 100.45, 110.78, 103.16, 28.77, 26.97, 63.14, 59.39, 91.22, 85.02,
    103.27, 96.73, 108.43, 101.67, 111.32, 104.55, 27.45, 25.82, 60.44, 56.70,
    86.64, 79.97, 98.45, 92.62, 103.47, 97.33, 106.40, 100.02, 28.99, 27.27,
    63.85, 59.82, 91.29, 84.15, 104.00, 97.82, 109.31, 102.78, 112.41, 105.58,
    29.40, 27.47, 64.54, 59.89, 90.91, 83.60, 105.47, 98.61, 110.83, 103.50,
    113.88, 106.07, 28.15, 26.04, 61.43, 56.54, 85.76, 79.37, 101.07, 93.56,
    106.09, 98.09, 108.76, 100.34, 29.49, 27.23, 64.27, 59.12, 89.72, 83.19,
    105.90, 97.85, 111.13, 102.58, 113.86, 104.91, 29.40, 27.03, 63.84, 58.82,
    89.72, 84.03, 105.66, 97.14, 110.77, 101.83, 113.30, 104.21, 27.87, 25.74,
    60.62, 56.35, 86.47, 81.35, 100.15, 92.43, 104.99, 97.00, 107.42, 99.48,
    29.01, 26.83, 63.14, 58.81, 90.32, 84.96, 104.22, 96.34, 109.27, 101.13,
    111.83, 103.76, 28.94, 27.05, 63.38, 59.54, 91.54, 85.59, 103.90, 97.03,
    109.05, 101.96, 111.87, 104.83, 27.95, 26.29, 61.50, 57.81, 88.51, 81.94,
    100.26, 94.28, 105.35, 99.09, 108.30, 101.88, 29.07, 27.35, 64.00, 60.10,
    91.91, 84.94, 104.28, 98.09, 109.59, 103.09, 112.68, 105.97, 29.46, 27.60,
    64.76, 60.30, 91.66, 84.27, 105.65, 99.05, 111.04, 104.00, 114.15, 106.67,
    28.62, 26.56, 62.58, 57.72, 87.52, 80.76, 102.73, 95.41, 107.88, 100.06,
    110.68, 102.40, 29.64, 27.45, 64.72, 59.62, 90.41, 83.57, 106.39, 98.61,
    111.70, 103.40, 114.54, 105.79, 29.61, 27.23, 64.33, 59.18, 90.08, 84.11,
    106.37, 97.87, 111.54, 102.59, 114.14, 104.93, 28.37, 26.13, 61.62, 57.08,
    87.44, 82.22, 101.94, 93.87, 106.85, 98.47, 109.28, 100.90, 29.22, 26.95,
    63.51, 58.95, 90.40, 85.03, 105.00, 96.80, 110.06, 101.57, 112.59, 104.13,
    29.06, 27.07, 63.51, 59.53, 91.54, 85.84, 104.36, 97.12, 109.49, 102.03,
    112.22, 104.85, 28.21, 26.50, 62.02, 58.34, 89.49, 83.12, 101.24, 95.06,
    106.34, 99.91, 109.26, 102.75, 29.09, 27.35, 63.99, 60.17, 92.20, 85.48,
    104.36, 98.08, 109.65, 103.10, 112.69, 106.01, 29.44, 27.64, 64.78, 60.52,
    92.17, 84.80, 105.57, 99.18, 110.97, 104.18, 114.11, 106.94, 28.87, 26.88,
    63.25, 58.50, 88.72, 81.69, 103.59, 96.53, 108.82, 101.27, 111.73, 103.71,
    29.70, 27.59, 64.99, 60.01, 90.99, 83.88, 106.57, 99.12, 111.93, 103.96,
    114.87, 106.42, 29.74, 27.40, 64.71, 59.49, 90.40, 84.12, 106.83, 98.46,
    112.07, 103.21, 114.74, 105.55, 28.72, 26.42, 62.35, 57.58, 88.02, 82.64,
    103.20, 94.90, 108.17, 99.52, 110.62, 101.90, 29.40, 27.06, 63.84, 59.06,
    90.39, 84.95, 105.64, 97.22, 110.73, 101.96, 113.25, 104.45, 29.17, 27.08,
    63.62, 59.46, 91.41, 85.88, 104.80, 97.19, 109.90, 102.06, 112.55, 104.80,
    8.86, 8.30, 19.44, 18.28, 28.09, 26.21, 31.82, 29.77, 33.41, 31.29,
    34.29, 32.18, 25.05, 23.49, 54.99, 51.73, 79.44, 73.99, 89.90, 84.26,
    94.41, 88.56, 96.94, 91.08, 26.15, 24.60, 57.59, 54.01, 82.48, 76.09,
    93.80, 88.24, 98.59, 92.73, 101.39, 95.28, 20.99, 19.63, 46.10, 42.83,
    65.04, 59.80, 75.29, 70.46, 79.12, 73.97, 81.31, 75.83, 27.62, 25.79,
    60.62, 56.21, 85.30, 78.46, 99.10, 92.59, 104.13, 97.17, 106.98, 99.56,
    28.18, 26.05, 61.47, 56.56, 85.81, 79.47, 101.19, 93.60, 106.21, 98.13,
    108.85, 100.37, 24.14, 22.19, 52.42, 48.27, 73.57, 68.83, 86.74, 79.76,
    90.94, 83.61, 93.03, 85.54, 28.31, 26.02, 61.45, 56.64, 86.44, 81.01,
    101.71, 93.51, 106.63, 98.04, 109.06, 100.33, 28.30, 26.15, 61.57, 57.28,
    87.92, 82.71, 101.69, 93.91, 106.61, 98.56, 109.09, 101.10, 25.18, 23.51,
    55.12, 51.74, 79.56, 74.47, 90.43, 84.34, 94.89, 88.62, 97.31, 91.10,
    28.23, 26.40, 61.85, 58.12, 89.34, 83.49, 101.34, 94.70, 106.37, 99.52,
    109.14, 102.32, 28.58, 26.88, 62.90, 59.11, 90.46, 83.69, 102.52, 96.42,
    107.73, 101.34, 110.75, 104.18, 26.45, 24.81, 58.19, 54.24, 82.51, 75.87,
    94.88, 89.03, 99.73, 93.49, 102.53, 95.92, 28.96, 27.12, 63.65, 59.22,
    89.99, 82.74, 103.87, 97.33, 109.17, 102.19, 112.22, 104.80, 29.33, 27.19,
    64.09, 59.08, 89.59, 82.72, 105.26, 97.68, 110.52, 102.44, 113.37, 104.82,
    27.21, 25.04, 59.15, 54.39, 82.74, 77.16, 97.75, 89.98, 102.51, 94.32,
    104.92, 96.46, 29.21, 26.86, 63.45, 58.38, 88.91, 83.07, 104.94, 96.53,
    110.04, 101.18, 112.58, 103.50, 29.06, 26.78, 63.13, 58.53, 89.69, 84.35,
    104.42, 96.20, 109.45, 100.92, 111.95, 103.43, 27.08, 25.20, 59.14, 55.38,
    85.17, 79.92, 97.28, 90.42, 102.04, 94.97, 104.55, 97.57, 28.77, 26.82,
    62.90, 58.99, 90.72, 85.01, 103.31, 96.22, 108.39, 101.08, 111.11, 103.89,
    28.94, 27.19, 63.63, 59.85, 91.77, 85.18, 103.83, 97.53, 109.07, 102.51,
    112.08, 105.42, 27.67, 26.00, 60.92, 56.97, 86.83, 79.94, 99.25, 93.29,
    104.32, 98.01, 107.29, 100.63, 29.24, 27.44, 64.34, 60.06, 91.43, 84.10,
    104.86, 98.48, 110.22, 103.43, 113.34, 106.16, 29.60, 27.54, 64.83, 59.92,
    90.86, 83.70, 106.22, 98.91, 111.57, 103.76, 114.54, 106.24, 28.24, 26.03,
    61.47, 56.52, 85.84, 79.77, 101.42, 93.55, 106.40, 98.06, 108.97, 100.29,
    29.56, 27.22, 64.29, 59.11, 89.85, 83.67, 106.18, 97.82, 111.37, 102.53,
    114.01, 104.86, 29.39, 27.05, 63.82, 58.98, 90.20, 84.72, 105.63, 97.17,
    110.73, 101.90, 113.24, 104.35, 27.88, 25.85, 60.76, 56.72, 87.17, 81.94,
    100.16, 92.78, 105.03, 97.41, 107.53, 100.01, 29.03, 26.97, 63.33, 59.23,
    91.07, 85.54, 104.27, 96.78, 109.36, 101.63, 112.02, 104.38, 29.07, 27.26,
    63.82, 60.03, 92.19, 85.86, 104.33, 97.78, 109.56, 102.78, 112.50, 105.70,
    28.16, 26.49, 62.02, 58.16, 88.82, 81.94, 101.02, 95.03, 106.17, 99.86,
    109.18, 102.61, 29.31, 27.55, 64.53, 60.42, 92.16, 84.91, 105.11, 98.84,
    110.48, 103.85, 113.62, 106.67, 29.68, 27.71, 65.13, 60.39, 91.64, 84.29,
    106.48, 99.48, 111.88, 104.40, 114.94, 106.97, 28.75, 26.57, 62.70, 57.69,
    87.53, 81.06, 103.22, 95.48, 108.34, 100.10, 111.03, 102.38, 29.75, 27.45,
    64.80, 59.59, 90.46, 83.94, 106.81, 98.64, 112.08, 103.40, 114.82, 105.75,
    29.62, 27.23, 64.30, 59.27, 90.45, 84.76, 106.42, 97.84, 111.56, 102.58,
    114.11, 104.98, 28.36, 26.21, 61.69, 57.39, 88.10, 82.88, 101.90, 94.10,
    106.82, 98.75, 109.30, 101.30, 29.22, 27.05, 63.63, 59.31, 91.11, 85.69,
    104.98, 97.11, 110.07, 101.94, 112.66, 104.62, 29.15, 27.26, 63.87, 60.02,
    92.26, 86.21, 104.65, 97.80, 109.85, 102.77, 112.70, 105.67, 28.41, 26.72,
    62.53, 58.76, 89.92, 83.18, 101.91, 95.85, 107.09, 100.74, 110.09, 103.56,
    29.30, 27.57, 64.52, 60.56, 92.58, 85.50, 105.12, 98.89, 110.47, 103.92,
    113.59, 106.81, 29.68, 27.79, 65.22, 60.68, 92.21, 84.78, 106.44, 99.74,
    111.87, 104.71, 114.99, 107.38, 29.03, 26.92, 63.45, 58.49, 88.69, 81.89,
    104.21, 96.70, 109.42, 101.41, 112.23, 103.77, 29.84, 27.62, 65.14, 59.98,
    90.97, 84.14, 107.13, 99.23, 112.47, 104.04, 115.31, 106.43, 29.78, 27.39,
    64.69, 59.52, 90.65, 84.70, 106.99, 98.41, 112.18, 103.16, 114.78, 105.52,
    28.70, 26.46, 62.36, 57.82, 88.60, 83.33, 103.14, 95.02, 108.12, 99.68,
    110.58, 102.17, 29.38, 27.12, 63.89, 59.35, 91.04, 85.65, 105.59, 97.40,
    110.69, 102.20, 113.24, 104.80, 29.23, 27.25, 63.90, 59.93, 92.17, 86.37,
    104.96, 97.75, 110.12, 102.70, 112.89, 105.55, 8.46, 7.95, 18.60, 17.50,
    26.85, 24.95, 30.37, 28.51, 31.90, 29.96, 32.77, 30.82, 23.93, 22.50,
    52.64, 49.51, 75.88, 70.38, 85.87, 80.69, 90.21, 84.81, 92.71, 87.21,
    25.04, 23.52, 55.12, 51.52, 78.48, 72.23, 89.82, 84.40, 94.41, 88.66,
    97.09, 91.02, 20.08, 18.70, 44.00, 40.71, 61.75, 56.84, 72.03, 67.15,
    75.67, 70.46, 77.70, 72.16, 26.41, 24.55, 57.81, 53.40, 80.97, 74.61,
    94.76, 88.18, 99.53, 92.49, 102.16, 94.69, 26.84, 24.73, 58.41, 53.70,
    81.58, 75.87, 96.40, 88.88, 101.13, 93.16, 103.55, 95.28, 22.92, 21.08,
    49.77, 45.94, 70.21, 65.90, 82.38, 75.75, 86.35, 79.43, 88.31, 81.32,
    26.87, 24.73, 58.35, 53.96, 82.56, 77.57, 96.57, 88.85, 101.22, 93.18,
    103.52, 95.44, 26.89, 24.95, 58.63, 54.77, 84.19, 79.12, 96.60, 89.55,
    101.30, 94.03, 103.74, 96.55, 24.01, 22.50, 52.68, 49.55, 76.12, 70.98,
    86.19, 80.70, 90.50, 84.82, 92.90, 87.23, 26.94, 25.27, 59.16, 55.65,
    85.44, 79.51, 96.67, 90.65, 101.52, 95.28, 104.26, 97.99, 27.36, 25.73,
    60.24, 56.46, 86.18, 79.47, 98.12, 92.29, 103.13, 96.98, 106.05, 99.63,
    25.32, 23.66, 55.60, 51.61, 78.36, 72.05, 90.83, 84.96, 95.45, 89.17,
    98.08, 91.40, 27.71, 25.85, 60.78, 56.31, 85.44, 78.61, 99.41, 92.82,
    104.45, 97.40, 107.29, 99.78, 27.97, 25.83, 60.96, 56.08, 85.10, 78.87,
    100.41, 92.82, 105.38, 97.31, 107.99, 99.53, 25.86, 23.77, 56.14, 51.71,
    78.86, 73.83, 92.91, 85.42, 97.40, 89.55, 99.63, 91.63, 27.74, 25.51,
    60.23, 55.54, 84.81, 79.52, 99.69, 91.66, 104.51, 96.10, 106.88, 98.36,
    27.59, 25.51, 60.04, 55.90, 85.84, 80.75, 99.14, 91.60, 103.93, 96.15,
    106.36, 98.64, 25.79, 24.09, 56.47, 53.03, 81.54, 76.27, 92.60, 86.43,
    97.18, 90.82, 99.68, 93.37, 27.41, 25.66, 60.10, 56.49, 86.82, 81.07,
    98.41, 92.03, 103.31, 96.72, 106.01, 99.45, 27.68, 26.04, 60.93, 57.23,
    87.55, 80.94, 99.29, 93.39, 104.34, 98.16, 107.28, 100.90, 26.50, 24.84,
    58.27, 54.28, 82.53, 75.88, 95.05, 89.14, 99.90, 93.60, 102.70, 96.01,
    27.99, 26.19, 61.50, 57.18, 86.86, 79.86, 100.40, 94.03, 105.52, 98.71,
    108.45, 101.21, 28.26, 26.19, 61.74, 56.89, 86.26, 79.70, 101.45, 94.08,
    106.52, 98.65, 109.24, 100.93, 26.86, 24.71, 58.37, 53.69, 81.71, 76.25,
    96.50, 88.80, 101.20, 93.08, 103.56, 95.21, 28.10, 25.84, 61.03, 56.17,
    85.59, 80.02, 100.96, 92.85, 105.86, 97.33, 108.30, 99.57, 27.90, 25.73,
    60.64, 56.26, 86.25, 81.13, 100.27, 92.42, 105.11, 96.96, 107.51, 99.39,
    26.52, 24.69, 57.93, 54.28, 83.48, 78.30, 95.23, 88.59, 99.90, 93.06,
    102.38, 95.62, 27.63, 25.77, 60.44, 56.71, 87.20, 81.67, 99.21, 92.47,
    104.10, 97.15, 106.73, 99.86, 27.77, 26.11, 61.09, 57.45, 88.06, 81.67,
    99.65, 93.64, 104.69, 98.42, 107.59, 101.21, 26.97, 25.33, 59.36, 55.48,
    84.51, 77.78, 96.73, 90.89, 101.67, 95.48, 104.56, 98.02, 28.06, 26.33,
    61.74, 57.60, 87.64, 80.60, 100.65, 94.49, 105.80, 99.23, 108.78, 101.83,
    28.37, 26.38, 62.11, 57.37, 86.99, 80.17, 101.81, 94.74, 106.94, 99.37,
    109.76, 101.73, 27.38, 25.23, 59.58, 54.77, 83.22, 77.40, 98.33, 90.66,
    103.16, 95.03, 105.63, 97.18, 28.31, 26.06, 61.55, 56.59, 86.06, 80.20,
    101.69, 93.64, 106.65, 98.15, 109.16, 100.38, 28.12, 25.88, 61.05, 56.46,
    86.39, 81.17, 101.04, 92.96, 105.91, 97.50, 108.31, 99.86, 26.94, 25.00,
    58.74, 54.88, 84.36, 79.28, 96.79, 89.73, 101.50, 94.22, 103.94, 96.74,
    27.78, 25.82, 60.63, 56.74, 87.25, 81.91, 99.77, 92.67, 104.65, 97.33,
    107.21, 99.98, 27.82, 26.10, 61.09, 57.47, 88.23, 82.11, 99.83, 93.62,
    104.84, 98.40, 107.67, 101.19, 27.19, 25.57, 59.88, 56.12, 85.67, 78.99,
    97.53, 91.74, 102.51, 96.40, 105.42, 99.04, 28.06, 26.37, 61.78, 57.81,
    88.14, 81.17, 100.63, 94.62, 105.78, 99.40, 108.78, 102.08, 28.40, 26.49,
    62.28, 57.70, 87.55, 80.55, 101.87, 95.11, 107.03, 99.80, 109.94, 102.24,
    27.69, 25.57, 60.35, 55.52, 84.24, 78.08, 99.41, 91.89, 104.32, 96.33,
    106.90, 98.52, 28.44, 26.23, 61.92, 56.94, 86.45, 80.29, 102.12, 94.25,
    107.15, 98.79, 109.75, 101.04, 28.28, 26.01, 61.41, 56.63, 86.46, 81.07,
    101.64, 93.44, 106.55, 97.97, 108.97, 100.28, 27.25, 25.20, 59.31, 55.22,
    84.79, 79.76, 97.92, 90.49, 102.66, 94.98, 105.06, 97.44, 27.91, 25.86,
    60.80, 56.72, 87.16, 81.95, 100.28, 92.82, 105.14, 97.45, 107.64, 100.03,
    27.85, 26.07, 61.06, 57.39, 88.21, 82.36, 99.98, 93.50, 104.96, 98.27,
    107.71, 101.04, 8.89, 8.26, 19.40, 18.14, 27.89, 26.20, 31.94, 29.64,
    33.50, 31.13, 34.31, 31.97, 25.09, 23.35, 54.80, 51.34, 78.95, 74.06,
    90.10, 83.79, 94.52, 88.02, 96.86, 90.44, 26.01, 24.42, 57.16, 53.77,
    82.50, 76.68, 93.33, 87.59, 98.03, 92.07, 100.70, 94.69, 20.83, 19.59,
    45.87, 42.95, 65.52, 60.37, 74.72, 70.27, 78.54, 73.83, 80.77, 75.83,
    27.43, 25.77, 60.39, 56.45, 86.00, 79.16, 98.39, 92.46, 103.42, 97.13,
    106.35, 99.72, 28.14, 26.22, 61.69, 57.09, 86.60, 79.71, 100.98, 94.17,
    106.08, 98.80, 108.94, 101.19, 24.28, 22.41, 52.90, 48.65, 73.85, 68.53,
    87.20, 80.53, 91.50, 84.41, 93.74, 86.33, 28.51, 26.27, 62.04, 57.04,
    86.64, 80.56, 102.38, 94.41, 107.41, 98.96, 109.98, 101.20, 28.57, 26.28,
    62.03, 57.26, 87.49, 82.10, 102.68, 94.41, 107.63, 99.00, 110.07, 101.35,
    25.32, 23.44, 55.14, 51.40, 78.96, 74.26, 90.98, 84.15, 95.38, 88.34,
    97.63, 90.66, 28.34, 26.29, 61.79, 57.71, 88.70, 83.36, 101.82, 94.36,
    106.77, 99.08, 109.33, 101.73, 28.48, 26.68, 62.47, 58.75, 90.26, 84.18,
    102.22, 95.69, 107.32, 100.58, 110.17, 103.43, 26.26, 24.70, 57.81, 54.26,
    82.94, 76.60, 94.18, 88.60, 98.97, 93.11, 101.77, 95.69, 28.74, 27.03,
    63.29, 59.33, 90.58, 83.53, 103.09, 96.97, 108.35, 101.90, 111.43, 104.69,
    29.22, 27.31, 64.16, 59.57, 90.45, 83.17, 104.81, 98.05, 110.14, 102.91,
    113.18, 105.49, 27.31, 25.27, 59.61, 54.89, 83.24, 76.99, 98.04, 90.81,
    102.92, 95.21, 105.52, 97.40, 29.36, 27.12, 64.00, 58.88, 89.34, 82.78,
    105.40, 97.45, 110.62, 102.16, 113.36, 104.49, 29.33, 26.97, 63.70, 58.66,
    89.44, 83.72, 105.40, 96.91, 110.50, 101.59, 113.03, 103.95, 27.28, 25.19,
    59.32, 55.11, 84.54, 79.53, 98.05, 90.44, 102.78, 94.90, 105.15, 97.31,
    28.95, 26.77, 63.00, 58.64, 90.03, 84.69, 104.02, 96.10, 109.05, 100.87,
    111.60, 103.48, 28.90, 27.00, 63.28, 59.42, 91.37, 85.49, 103.79, 96.86,
    108.92, 101.77, 111.71, 104.63, 27.48, 25.84, 60.47, 56.85, 87.08, 80.66,
    98.60, 92.69, 103.60, 97.43, 106.48, 100.18, 29.02, 27.30, 63.89, 60.02,
    91.82, 84.90, 104.11, 97.93, 109.40, 102.92, 112.48, 105.80, 29.43, 27.59,
    64.73, 60.31, 91.71, 84.33, 105.57, 99.03, 110.96, 103.98, 114.08, 106.67,
    28.27, 26.25, 61.84, 57.07, 86.52, 79.80, 101.46, 94.29, 106.55, 98.89,
    109.34, 101.22, 29.64, 27.46, 64.75, 59.67, 90.48, 83.58, 106.38, 98.67,
    111.69, 103.47, 114.55, 105.86, 29.65, 27.28, 64.44, 59.26, 90.18, 84.14,
    106.51, 98.03, 111.70, 102.75, 114.31, 105.10, 28.13, 25.90, 61.09, 56.56,
    86.60, 81.41, 101.08, 93.05, 105.95, 97.60, 108.36, 99.99, 29.26, 26.98,
    63.59, 58.99, 90.42, 85.05, 105.16, 96.91, 110.23, 101.67, 112.76, 104.22,
    29.11, 27.10, 63.60, 59.58, 91.62, 85.95, 104.56, 97.24, 109.69, 102.14,
    112.40, 104.95, 28.01, 26.30, 61.55, 57.91, 88.85, 82.58, 100.51, 94.33,
    105.57, 99.15, 108.45, 101.97, 29.12, 27.37, 64.04, 60.23, 92.33, 85.65,
    104.48, 98.16, 109.76, 103.18, 112.79, 106.10, 29.47, 27.69, 64.88, 60.65,
    92.40, 85.04, 105.71, 99.35, 111.12, 104.36, 114.27, 107.14, 28.71, 26.75,
    62.93, 58.23, 88.33, 81.31, 103.01, 96.05, 108.21, 100.78, 111.13, 103.22,
    29.75, 27.66, 65.12, 60.17, 91.23, 84.07, 106.74, 99.35, 112.12, 104.21,
    115.09, 106.69, 29.83, 27.49, 64.91, 59.68, 90.66, 84.30, 107.13, 98.78,
    112.38, 103.54, 115.08, 105.89, 28.63, 26.33, 62.15, 57.37, 87.67, 82.27,
    102.88, 94.60, 107.84, 99.19, 110.29, 101.55, 29.49, 27.14, 64.03, 59.20,
    90.57, 85.09, 105.97, 97.49, 111.08, 102.25, 113.60, 104.72, 29.27, 27.15,
    63.80, 59.59, 91.60, 86.09, 105.14, 97.45, 110.26, 102.32, 112.90, 105.06,
    28.31, 26.52, 62.10, 58.40, 89.72, 83.68, 101.61, 95.13, 106.68, 99.98,
    109.51, 102.81, 29.17, 27.36, 64.05, 60.25, 92.51, 86.11, 104.67, 98.14,
    109.92, 103.16, 112.89, 106.09, 29.45, 27.70, 64.86, 60.80, 92.82, 85.59,
    105.64, 99.37, 111.03, 104.42, 114.18, 107.28, 28.93, 27.04, 63.52, 58.97,
    89.54, 82.33, 103.76, 97.06, 109.04, 101.88, 112.05, 104.43, 29.77, 27.78,
    65.31, 60.52, 91.83, 84.48, 106.81, 99.74, 112.22, 104.66, 115.28, 107.23,
    29.93, 27.65, 65.25, 60.03, 91.08, 84.40, 107.46, 99.35, 112.78, 104.15,
    115.57, 106.53, 28.98, 26.64, 62.92, 57.94, 88.35, 82.70, 104.11, 95.72,
    109.15, 100.35, 111.65, 102.68, 29.67, 27.28, 64.41, 59.39, 90.67, 85.00,
    106.61, 98.01, 111.76, 102.76, 114.30, 105.18, 29.41, 27.19, 64.00, 59.57,
    91.47, 86.05, 105.68, 97.64, 110.79, 102.48, 113.38, 105.13, 8.91, 8.31,
    19.48, 18.28, 28.11, 26.33, 31.98, 29.81, 33.55, 31.32, 34.40, 32.19,
    25.14, 23.50, 55.08, 51.74, 79.54, 74.37, 90.28, 84.31, 94.75, 88.60,
    97.20, 91.09, 26.17, 24.61, 57.59, 54.13, 82.88, 76.72, 93.88, 88.28,
    98.64, 92.79, 101.41, 95.40, 21.00, 19.70, 46.19, 43.09, 65.57, 60.30,
    75.31, 70.69, 79.15, 74.24, 81.39, 76.18, 27.64, 25.90, 60.78, 56.59,
    86.02, 79.08, 99.15, 92.96, 104.21, 97.60, 107.13, 100.11, 28.30, 26.25,
    61.86, 57.06, 86.51, 79.84, 101.55, 94.31, 106.64, 98.90, 109.41, 101.22,
    24.32, 22.39, 52.88, 48.62, 73.94, 68.90, 87.37, 80.45, 91.63, 84.33,
    93.79, 86.25, 28.53, 26.24, 61.99, 57.03, 86.81, 81.06, 102.50, 94.31,
    107.49, 98.86, 109.98, 101.12, 28.54, 26.30, 62.01, 57.44, 88.00, 82.74,
    102.58, 94.46, 107.52, 99.09, 109.97, 101.54, 25.33, 23.55, 55.30, 51.75,
    79.58, 74.71, 90.99, 84.52, 95.44, 88.77, 97.78, 91.18, 28.37, 26.43,
    62.01, 58.13, 89.39, 83.81, 101.90, 94.84, 106.90, 99.63, 109.57, 102.38,
    28.62, 26.89, 62.91, 59.18, 90.78, 84.31, 102.70, 96.43, 107.87, 101.36,
    110.83, 104.23, 26.46, 24.87, 58.25, 54.51, 83.10, 76.53, 94.89, 89.21,
    99.74, 93.73, 102.57, 96.25, 28.97, 27.20, 63.75, 59.55, 90.69, 83.45,
    103.89, 97.60, 109.20, 102.52, 112.29, 105.23, 29.41, 27.38, 64.42, 59.58,
    90.36, 83.21, 105.51, 98.32, 110.84, 103.15, 113.80, 105.62, 27.39, 25.26,
    59.64, 54.84, 83.26, 77.32, 98.35, 90.77, 103.19, 95.14, 105.69, 97.30,
    29.42, 27.10, 64.00, 58.84, 89.40, 83.20, 105.65, 97.38, 110.83, 102.07,
    113.47, 104.38, 29.31, 26.96, 63.64, 58.78, 89.85, 84.36, 105.34, 96.87,
    110.41, 101.58, 112.92, 104.01, 27.27, 25.27, 59.42, 55.43, 85.17, 80.08,
    97.99, 90.71, 102.75, 95.23, 105.18, 97.75, 28.95, 26.88, 63.14, 59.02,
    90.73, 85.24, 104.00, 96.46, 109.07, 101.29, 111.70, 104.02, 29.01, 27.20,
    63.67, 59.88, 91.98, 85.73, 104.13, 97.54, 109.34, 102.52, 112.25, 105.43,
    27.68, 26.04, 60.94, 57.18, 87.36, 80.63, 99.28, 93.39, 104.34, 98.15,
    107.29, 100.86, 29.24, 27.49, 64.38, 60.32, 92.05, 84.84, 104.87, 98.64,
    110.23, 103.64, 113.36, 106.46, 29.65, 27.69, 65.08, 60.38, 91.66, 84.29,
    106.36, 99.43, 111.76, 104.36, 114.83, 106.95, 28.39, 26.25, 61.93, 57.01,
    86.47, 80.03, 101.92, 94.33, 106.98, 98.90, 109.66, 101.16, 29.74, 27.46,
    64.80, 59.61, 90.46, 83.88, 106.78, 98.66, 112.05, 103.42, 114.81, 105.78,
    29.65, 27.26, 64.37, 59.31, 90.47, 84.74, 106.53, 97.94, 111.68, 102.68,
    114.23, 105.07, 28.10, 25.96, 61.12, 56.82, 87.19, 82.03, 100.98, 93.20,
    105.86, 97.81, 108.31, 100.31, 29.24, 27.06, 63.66, 59.30, 91.08, 85.67,
    105.08, 97.14, 110.17, 101.97, 112.75, 104.63, 29.18, 27.28, 63.91, 60.04,
    92.31, 86.31, 104.77, 97.84, 109.96, 102.82, 112.80, 105.71, 28.18, 26.51,
    62.02, 58.29, 89.25, 82.62, 101.10, 95.07, 106.23, 99.92, 109.21, 102.73,
    29.31, 27.58, 64.54, 60.60, 92.68, 85.64, 105.15, 98.92, 110.51, 103.96,
    113.62, 106.86, 29.70, 27.83, 65.30, 60.80, 92.41, 84.96, 106.54, 99.88,
    111.97, 104.87, 115.11, 107.56, 28.86, 26.78, 63.10, 58.20, 88.24, 81.44,
    103.59, 96.20, 108.78, 100.88, 111.60, 103.24, 29.89, 27.67, 65.26, 60.11,
    91.16, 84.26, 107.28, 99.43, 112.63, 104.26, 115.49, 106.66, 29.85, 27.46,
    64.86, 59.67, 90.83, 84.82, 107.25, 98.68, 112.47, 103.43, 115.08, 105.80,
    28.60, 26.35, 62.13, 57.56, 88.18, 82.91, 102.78, 94.65, 107.73, 99.28,
    110.18, 101.74, 29.46, 27.18, 64.03, 59.44, 91.16, 85.75, 105.86, 97.60,
    110.97, 102.41, 113.52, 104.99, 29.30, 27.30, 64.04, 60.03, 92.31, 86.55,
    105.23, 97.94, 110.39, 102.89, 113.15, 105.73, 28.45, 26.73, 62.54, 58.83,
    90.24, 83.81, 102.09, 95.85, 107.23, 100.75, 110.17, 103.61, 29.33, 27.58,
    64.53, 60.68, 92.97, 86.18, 105.24, 98.91, 110.56, 103.96, 113.64, 106.90,
    29.68, 27.87, 65.33, 61.02, 92.93, 85.50, 106.46, 100.01, 111.90, 105.05,
    115.07, 107.83, 29.11, 27.10, 63.78, 58.98, 89.45, 82.37, 104.45, 97.33,
    109.73, 102.11, 112.66, 104.56, 29.95, 27.82, 65.53, 60.50, 91.74, 84.57,
    107.46, 99.94, 112.87, 104.82, 115.83, 107.30, 29.99, 27.63, 65.24, 59.98,
    91.15, 84.82, 107.72, 99.28, 112.99, 104.06, 115.69, 106.42, 28.95, 26.63,
    62.86, 58.06, 88.76, 83.33, 104.05, 95.69, 109.06, 100.34, 111.54, 102.74,
    29.64, 27.29, 64.37, 59.55, 91.15, 85.66, 106.52, 98.02, 111.65, 102.81,
    114.18, 105.31, 29.41, 27.31, 64.15, 59.96, 92.18, 86.60, 105.66, 98.00,
    110.81, 102.91, 113.49, 105.68, 8.53, 7.99, 18.72, 17.60, 27.04, 25.23,
    30.64, 28.67, 32.16, 30.13, 33.01, 30.98, 24.12, 22.62, 52.95, 49.81,
    76.49, 71.23, 86.56, 81.13, 90.90, 85.27, 93.34, 87.69, 25.18, 23.69,
    55.45, 52.00, 79.41, 73.25, 90.32, 84.97, 94.93, 89.28, 97.62, 91.74,
    20.21, 18.90, 44.39, 41.23, 62.62, 57.57, 72.49, 67.84, 76.18, 71.21,
    78.29, 73.00, 26.60, 24.83, 58.36, 54.11, 82.12, 75.53, 95.42, 89.14,
    100.26, 93.55, 103.00, 95.86, 27.14, 25.08, 59.18, 54.45, 82.61, 76.51,
    97.42, 90.11, 102.25, 94.47, 104.80, 96.63, 23.24, 21.37, 50.47, 46.47,
    70.83, 66.27, 83.50, 76.78, 87.55, 80.49, 89.56, 82.35, 27.25, 25.05,
    59.16, 54.53, 83.23, 78.00, 97.92, 90.02, 102.65, 94.38, 104.99, 96.59,
    27.25, 25.18, 59.28, 55.15, 84.66, 79.64, 97.90, 90.41, 102.64, 94.89,
    105.02, 97.34, 24.25, 22.64, 53.07, 49.82, 76.60, 71.70, 87.06, 81.21,
    91.36, 85.33, 93.69, 87.72, 27.18, 25.42, 59.55, 55.96, 86.02, 80.38,
    97.57, 91.18, 102.41, 95.82, 105.08, 98.52, 27.52, 25.88, 60.57, 56.91,
    87.09, 80.57, 98.71, 92.84, 103.73, 97.58, 106.64, 100.31, 25.47, 23.88,
    56.02, 52.22, 79.43, 73.04, 91.36, 85.72, 96.02, 90.01, 98.73, 92.35,
    27.88, 26.11, 61.29, 57.02, 86.64, 79.65, 100.02, 93.71, 105.12, 98.39,
    108.05, 100.90, 28.24, 26.18, 61.70, 56.88, 86.25, 79.64, 101.35, 94.04,
    106.41, 98.62, 109.15, 100.91, 26.20, 24.11, 56.94, 52.36, 79.66, 74.29,
    94.11, 86.63, 98.69, 90.80, 101.00, 92.87, 28.12, 25.86, 61.09, 56.21,
    85.60, 79.99, 101.03, 92.93, 105.94, 97.41, 108.38, 99.65, 27.97, 25.79,
    60.78, 56.35, 86.36, 81.22, 100.53, 92.61, 105.37, 97.16, 107.78, 99.58,
    26.07, 24.26, 56.94, 53.33, 82.00, 76.95, 93.65, 87.05, 98.24, 91.44,
    100.66, 93.94, 27.70, 25.82, 60.56, 56.80, 87.35, 81.85, 99.46, 92.64,
    104.35, 97.33, 106.98, 100.03, 27.86, 26.18, 61.27, 57.63, 88.36, 82.00,
    99.97, 93.91, 105.02, 98.71, 107.91, 101.51, 26.65, 25.04, 58.66, 54.85,
    83.59, 76.96, 95.56, 89.83, 100.45, 94.36, 103.30, 96.89, 28.15, 26.42,
    61.95, 57.82, 88.02, 80.97, 100.97, 94.82, 106.13, 99.58, 109.13, 102.21,
    28.50, 26.51, 62.41, 57.68, 87.47, 80.58, 102.27, 95.23, 107.42, 99.89,
    110.28, 102.28, 27.19, 25.06, 59.18, 54.41, 82.64, 76.81, 97.64, 90.06,
    102.44, 94.41, 104.91, 96.55, 28.46, 26.20, 61.89, 56.90, 86.50, 80.56,
    102.22, 94.17, 107.22, 98.71, 109.76, 100.95, 28.30, 26.04, 61.44, 56.78,
    86.85, 81.58, 101.70, 93.54, 106.60, 98.10, 109.01, 100.46, 26.84, 24.89,
    58.50, 54.61, 83.93, 78.90, 96.43, 89.33, 101.11, 93.79, 103.53, 96.29,
    27.95, 25.96, 60.98, 57.03, 87.69, 82.36, 100.39, 93.18, 105.29, 97.86,
    107.85, 100.51, 27.99, 26.25, 61.45, 57.80, 88.76, 82.66, 100.45, 94.15,
    105.48, 98.96, 108.32, 101.77, 27.12, 25.51, 59.71, 56.00, 85.51, 78.88,
    97.27, 91.50, 102.23, 96.15, 105.13, 98.80, 28.22, 26.53, 62.13, 58.17,
    88.73, 81.75, 101.20, 95.17, 106.37, 99.99, 109.40, 102.70, 28.58, 26.67,
    62.70, 58.14, 88.22, 81.15, 102.52, 95.78, 107.72, 100.51, 110.67, 102.99,
    27.68, 25.58, 60.36, 55.54, 84.26, 78.05, 99.38, 91.92, 104.30, 96.36,
    106.90, 98.56, 28.64, 26.43, 62.38, 57.37, 87.09, 80.82, 102.84, 94.96,
    107.91, 99.54, 110.54, 101.81, 28.51, 26.21, 61.90, 57.06, 87.08, 81.61,
    102.45, 94.19, 107.40, 98.75, 109.85, 101.06, 27.30, 25.23, 59.39, 55.26,
    84.83, 79.80, 98.10, 90.59, 102.84, 95.08, 105.23, 97.53, 28.13, 26.04,
    61.26, 57.11, 87.73, 82.50, 101.06, 93.49, 105.96, 98.15, 108.46, 100.73,
    28.06, 26.25, 61.50, 57.79, 88.84, 83.00, 100.76, 94.17, 105.76, 98.96,
    108.51, 101.75, 27.35, 25.73, 60.21, 56.57, 86.57, 80.08, 98.12, 92.29,
    103.11, 97.00, 106.01, 99.72, 28.22, 26.54, 62.13, 58.31, 89.13, 82.31,
    101.21, 95.21, 106.37, 100.06, 109.38, 102.84, 28.57, 26.75, 62.80, 58.42,
    88.78, 81.62, 102.49, 96.03, 107.72, 100.82, 110.72, 103.39, 27.95, 25.91,
    61.08, 56.31, 85.38, 78.84, 100.33, 93.10, 105.35, 97.63, 108.06, 99.90,
    28.73, 26.59, 62.71, 57.75, 87.58, 81.01, 103.15, 95.53, 108.28, 100.16,
    111.01, 102.47, 28.67, 26.36, 62.28, 57.30, 87.27, 81.55, 103.00, 94.74,
    108.00, 99.31, 110.50, 101.59, 27.63, 25.47, 60.04, 55.67, 85.31, 80.23,
    99.30, 91.48, 104.08, 95.97, 106.46, 98.36, 28.29, 26.11, 61.51, 57.14,
    87.66, 82.47, 101.65, 93.77, 106.56, 98.40, 109.02, 100.90, 28.14, 26.23,
    61.53, 57.71, 88.74, 83.16, 101.05, 94.12, 106.02, 98.88, 108.69, 101.63,
    8.95, 8.28, 19.49, 18.15, 27.88, 26.23, 32.17, 29.74, 33.73, 31.21,
    34.52, 32.03, 25.25, 23.40, 55.01, 51.35, 78.91, 74.18, 90.70, 84.00,
    95.11, 88.20, 97.37, 90.54, 26.07, 24.41, 57.18, 53.76, 82.61, 77.10,
    93.60, 87.57, 98.26, 92.04, 100.85, 94.64, 20.83, 19.59, 45.86, 43.06,
    65.85, 60.85, 74.72, 70.28, 78.52, 73.87, 80.73, 75.93, 27.42, 25.79,
    60.38, 56.63, 86.49, 79.80, 98.35, 92.52, 103.37, 97.23, 106.30, 99.91,
    28.16, 26.34, 61.86, 57.48, 87.30, 80.26, 101.02, 94.56, 106.16, 99.26,
    109.11, 101.76, 24.39, 22.58, 53.25, 49.05, 74.38, 68.75, 87.53, 81.13,
    91.90, 85.07, 94.23, 87.03, 28.65, 26.48, 62.48, 57.50, 87.22, 80.77,
    102.85, 95.15, 107.95, 99.75, 110.64, 102.03, 28.80, 26.48, 62.54, 57.57,
    87.74, 82.08, 103.46, 95.14, 108.48, 99.73, 110.97, 102.04, 25.52, 23.54,
    55.46, 51.48, 78.95, 74.27, 91.69, 84.54, 96.11, 88.70, 98.32, 90.94,
    28.55, 26.38, 62.10, 57.77, 88.67, 83.41, 102.59, 94.72, 107.54, 99.41,
    110.04, 101.96, 28.59, 26.68, 62.56, 58.72, 90.29, 84.53, 102.65, 95.73,
    107.72, 100.58, 110.46, 103.39, 26.27, 24.69, 57.78, 54.33, 83.25, 77.17,
    94.23, 88.57, 99.00, 93.09, 101.75, 95.72, 28.74, 27.04, 63.26, 59.45,
    90.98, 84.18, 103.11, 96.97, 108.34, 101.92, 111.38, 104.78, 29.21, 27.40,
    64.26, 59.92, 91.14, 83.81, 104.78, 98.33, 110.14, 103.26, 113.24, 105.95,
    27.39, 25.45, 59.93, 55.33, 83.90, 77.35, 98.29, 91.40, 103.23, 95.87,
    105.94, 98.14, 29.46, 27.32, 64.39, 59.37, 90.01, 83.10, 105.74, 98.14,
    111.03, 102.92, 113.90, 105.32, 29.54, 27.19, 64.22, 59.05, 89.82, 83.75,
    106.12, 97.70, 111.30, 102.41, 113.91, 104.74, 27.51, 25.32, 59.74, 55.27,
    84.59, 79.50, 98.85, 90.97, 103.61, 95.41, 105.97, 97.74, 29.18, 26.89,
    63.40, 58.76, 90.05, 84.68, 104.86, 96.59, 109.91, 101.33, 112.42, 103.85,
    29.05, 27.03, 63.44, 59.40, 91.34, 85.73, 104.36, 96.98, 109.46, 101.87,
    112.16, 104.65, 27.52, 25.83, 60.46, 56.88, 87.29, 81.19, 98.76, 92.65,
    103.72, 97.38, 106.53, 100.15, 29.04, 27.29, 63.86, 60.07, 92.11, 85.51,
    104.22, 97.88, 109.47, 102.89, 112.49, 105.80, 29.42, 27.65, 64.77, 60.58,
    92.34, 85.01, 105.52, 99.19, 110.92, 104.21, 114.07, 107.00, 28.32, 26.40,
    62.09, 57.50, 87.23, 80.27, 101.60, 94.81, 106.74, 99.48, 109.63, 101.90,
    29.71, 27.64, 65.06, 60.14, 91.21, 84.01, 106.59, 99.27, 111.97, 104.14,
    114.95, 106.63, 29.83, 27.50, 64.94, 59.71, 90.67, 84.25, 107.13, 98.83,
    112.40, 103.60, 115.11, 105.95, 28.36, 26.08, 61.56, 56.80, 86.75, 81.37,
    101.90, 93.69, 106.82, 98.23, 109.24, 100.56, 29.50, 27.15, 64.06, 59.19,
    90.52, 85.01, 106.03, 97.52, 111.14, 102.27, 113.66, 104.73, 29.30, 27.16,
    63.84, 59.59, 91.58, 86.09, 105.25, 97.48, 110.37, 102.35, 113.00, 105.07,
    28.08, 26.29, 61.58, 57.89, 88.96, 83.03, 100.80, 94.31, 105.82, 99.12,
    108.60, 101.92, 29.17, 27.36, 64.04, 60.24, 92.51, 86.17, 104.70, 98.12,
    109.94, 103.13, 112.89, 106.06, 29.46, 27.71, 64.88, 60.84, 92.93, 85.74,
    105.68, 99.41, 111.07, 104.47, 114.22, 107.34, 28.73, 26.87, 63.10, 58.63,
    89.05, 81.87, 103.05, 96.46, 108.29, 101.25, 111.30, 103.80, 29.78, 27.81,
    65.36, 60.61, 91.98, 84.60, 106.84, 99.84, 112.27, 104.77, 115.34, 107.36,
    29.97, 27.71, 65.37, 60.16, 91.26, 84.51, 107.61, 99.55, 112.95, 104.37,
    115.77, 106.76, 28.85, 26.53, 62.66, 57.69, 87.92, 82.25, 103.67, 95.33,
    108.69, 99.93, 111.19, 102.24, 29.73, 27.33, 64.54, 59.48, 90.77, 85.05,
    106.82, 98.20, 111.98, 102.96, 114.53, 105.36, 29.48, 27.24, 64.13, 59.65,
    91.57, 86.14, 105.93, 97.81, 111.05, 102.66, 113.63, 105.30, 28.42, 26.52,
    62.18, 58.37, 89.76, 84.02, 102.04, 95.16, 107.07, 99.99, 109.80, 102.78,
    29.25, 27.36, 64.10, 60.23, 92.59, 86.53, 105.03, 98.14, 110.24, 103.13,
    113.11, 106.04, 29.45, 27.70, 64.83, 60.92, 93.23, 86.26, 105.66, 99.37,
    111.02, 104.44, 114.14, 107.37, 28.92, 27.12, 63.62, 59.31, 90.23, 82.97,
    103.74, 97.35, 109.04, 102.23, 112.11, 104.89, 29.78, 27.89, 65.46, 60.91,
    92.56, 85.10, 106.82, 100.10, 112.27, 105.10, 115.40, 107.78, 30.04, 27.85,
    65.65, 60.52, 91.77, 84.73, 107.81, 100.06, 113.20, 104.93, 116.12, 107.37,
    29.18, 26.85, 63.43, 58.33, 88.73, 82.73, 104.83, 96.50, 109.94, 101.15,
    112.52, 103.45, 29.89, 27.49, 64.94, 59.75, 90.98, 85.00, 107.39, 98.79,
    112.61, 103.55, 115.22, 105.93, 29.64, 27.32, 64.41, 59.70, 91.49, 86.04,
    106.53, 98.13, 111.67, 102.95, 114.21, 105.51, 8.95, 8.32, 19.53, 18.27,
    28.09, 26.38, 32.16, 29.85, 33.72, 31.34, 34.54, 32.19, 25.26, 23.51,
    55.18, 51.69, 79.50, 74.57, 90.72, 84.37, 95.16, 88.62, 97.52, 91.06,
    26.19, 24.59, 57.55, 54.14, 83.07, 77.21, 93.97, 88.20, 98.70, 92.71,
    101.40, 95.34, 20.98, 19.72, 46.19, 43.25, 65.97, 60.77, 75.24, 70.76,
    79.08, 74.34, 81.33, 76.35, 27.62, 25.95, 60.80, 56.83, 86.58, 79.69,
    99.07, 93.10, 104.13, 97.80, 107.09, 100.41, 28.34, 26.40, 62.11, 57.48,
    87.18, 80.25, 101.67, 94.81, 106.82, 99.47, 109.69, 101.88, 24.45, 22.56,
    53.26, 48.98, 74.35, 69.00, 87.80, 81.07, 92.13, 84.99, 94.38, 86.92,
    28.70, 26.45, 62.46, 57.42, 87.23, 81.12, 103.08, 95.05, 108.14, 99.63,
    110.73, 101.89, 28.77, 26.46, 62.45, 57.65, 88.09, 82.67, 103.37, 95.05,
    108.36, 99.67, 110.82, 102.04, 25.49, 23.60, 55.51, 51.75, 79.51, 74.77,
    91.59, 84.73, 96.03, 88.95, 98.30, 91.29, 28.53, 26.47, 62.21, 58.10,
    89.31, 83.94, 102.51, 95.01, 107.50, 99.76, 110.08, 102.43, 28.67, 26.86,
    62.90, 59.15, 90.88, 84.76, 102.92, 96.36, 108.06, 101.27, 110.92, 104.14,
    26.44, 24.87, 58.21, 54.64, 83.51, 77.12, 94.83, 89.21, 99.66, 93.75,
    102.48, 96.35, 28.94, 27.22, 63.73, 59.74, 91.20, 84.10, 103.80, 97.64,
    109.10, 102.60, 112.20, 105.41, 29.42, 27.50, 64.60, 59.98, 91.06, 83.73,
    105.53, 98.72, 110.90, 103.62, 113.96, 106.21, 27.50, 25.44, 60.01, 55.26,
    83.81, 77.52, 98.71, 91.42, 103.62, 95.85, 106.24, 98.06, 29.56, 27.30,
    64.44, 59.28, 89.95, 83.35, 106.12, 98.11, 111.37, 102.85, 114.13, 105.20,
    29.53, 27.15, 64.13, 59.06, 90.05, 84.30, 106.11, 97.57, 111.25, 102.28,
    113.80, 104.65, 27.47, 25.36, 59.73, 55.49, 85.12, 80.08, 98.71, 91.06,
    103.48, 95.55, 105.86, 97.98, 29.15, 26.95, 63.42, 59.04, 90.65, 85.28,
    104.73, 96.76, 109.79, 101.56, 112.35, 104.19, 29.10, 27.19, 63.72, 59.83,
    92.00, 86.07, 104.50, 97.52, 109.66, 102.48, 112.48, 105.35, 27.67, 26.02,
    60.89, 57.25, 87.68, 81.21, 99.28, 93.33, 104.31, 98.10, 107.22, 100.87,
    29.22, 27.49, 64.33, 60.43, 92.45, 85.48, 104.83, 98.60, 110.16, 103.63,
    113.26, 106.53, 29.64, 27.78, 65.18, 60.72, 92.33, 84.90, 106.30, 99.71,
    111.73, 104.70, 114.87, 107.40, 28.47, 26.43, 62.26, 57.45, 87.11, 80.35,
    102.16, 94.93, 107.29, 99.56, 110.08, 101.90, 29.84, 27.65, 65.19, 60.07,
    91.09, 84.15, 107.11, 99.34, 112.46, 104.17, 115.34, 106.58, 29.85, 27.46,
    64.87, 59.66, 90.79, 84.72, 107.24, 98.69, 112.46, 103.45, 115.08, 105.81,
    28.32, 26.08, 61.51, 56.94, 87.20, 81.98, 101.76, 93.68, 106.67, 98.26,
    109.09, 100.68, 29.46, 27.17, 64.03, 59.39, 91.05, 85.64, 105.88, 97.57,
    110.98, 102.37, 113.52, 104.93, 29.31, 27.29, 64.03, 59.99, 92.26, 86.54,
    105.27, 97.91, 110.43, 102.85, 113.17, 105.68, 28.20, 26.48, 61.98, 58.31,
    89.46, 83.14, 101.20, 94.99, 106.29, 99.84, 109.20, 102.68, 29.32, 27.56,
    64.48, 60.65, 92.96, 86.23, 105.20, 98.84, 110.51, 103.89, 113.57, 106.83,
    29.68, 27.88, 65.33, 61.06, 93.03, 85.62, 106.44, 100.03, 111.89, 105.08,
    115.06, 107.88, 28.91, 26.93, 63.36, 58.63, 88.93, 81.86, 103.72, 96.71,
    108.96, 101.47, 111.89, 103.92, 29.95, 27.85, 65.57, 60.57, 91.85, 84.64,
    107.48, 100.02, 112.89, 104.92, 115.88, 107.41, 30.03, 27.67, 65.35, 60.08,
    91.27, 84.88, 107.86, 99.45, 113.15, 104.24, 115.86, 106.60, 28.82, 26.51,
    62.57, 57.76, 88.27, 82.84, 103.58, 95.24, 108.57, 99.87, 111.03, 102.24,
    29.69, 27.32, 64.47, 59.61, 91.20, 85.68, 106.69, 98.16, 111.83, 102.94,
    114.37, 105.43, 29.47, 27.34, 64.24, 60.00, 92.23, 86.68, 105.86, 98.11,
    111.01, 103.02, 113.67, 105.78, 28.50, 26.70, 62.53, 58.80, 90.34, 84.25,
    102.31, 95.78, 107.41, 100.67, 110.26, 103.52, 29.37, 27.55, 64.49, 60.67,
    93.14, 86.69, 105.39, 98.82, 110.68, 103.87, 113.66, 106.82, 29.66, 27.89,
    65.30, 61.21, 93.45, 86.17, 106.37, 100.06, 111.80, 105.14, 114.98, 108.02,
    29.13, 27.22, 63.95, 59.38, 90.15, 82.89, 104.48, 97.73, 109.79, 102.58,
    112.82, 105.14, 29.98, 27.97, 65.76, 60.93, 92.45, 85.05, 107.54, 100.42,
    113.00, 105.38, 116.07, 107.96, 30.13, 27.84, 65.69, 60.44, 91.70, 84.98,
    108.20, 100.02, 113.55, 104.86, 116.36, 107.25, 29.17, 26.82, 63.34, 58.34,
    88.96, 83.27, 104.82, 96.37, 109.89, 101.03, 112.41, 103.37, 29.87, 27.46,
    64.85, 59.80, 91.29, 85.59, 107.33, 98.68, 112.51, 103.46, 115.07, 105.89,
    29.61, 27.38, 64.44, 59.98, 92.10, 86.64, 106.40, 98.30, 111.54, 103.18,
    114.15, 105.85, 8.60, 8.03, 18.82, 17.66, 27.16, 25.43, 30.89, 28.79,
    32.41, 30.25, 33.23, 31.10, 24.29, 22.71, 53.21, 49.98, 76.84, 71.84,
    87.21, 81.45, 91.53, 85.59, 93.90, 88.00, 25.28, 23.78, 55.64, 52.29,
    80.06, 74.11, 90.69, 85.28, 95.30, 89.64, 97.97, 92.16, 20.28, 19.03,
    44.63, 41.63, 63.34, 58.25, 72.75, 68.29, 76.47, 71.72, 78.63, 73.60,
    26.71, 25.02, 58.71, 54.66, 83.09, 76.39, 95.79, 89.80, 100.68, 94.29,
    103.50, 96.71, 27.33, 25.36, 59.76, 55.11, 83.56, 77.12, 98.10, 91.10,
    103.02, 95.54, 105.69, 97.77, 23.49, 21.62, 51.08, 46.97, 71.42, 66.57,
    84.39, 77.71, 88.51, 81.46, 90.60, 83.31, 27.56, 25.35, 59.88, 55.08,
    83.86, 78.31, 99.01, 91.10, 103.83, 95.49, 106.24, 97.67, 27.57, 25.40,
    59.89, 55.49, 85.01, 79.94, 99.08, 91.24, 103.86, 95.72, 106.22, 98.08,
    24.47, 22.75, 53.42, 50.00, 76.88, 72.17, 87.90, 81.64, 92.19, 85.75,
    94.45, 88.09, 27.41, 25.53, 59.90, 56.15, 86.36, 80.97, 98.43, 91.62,
    103.27, 96.25, 105.85, 98.90, 27.65, 25.97, 60.78, 57.18, 87.69, 81.44,
    99.21, 93.16, 104.21, 97.92, 107.07, 100.70, 25.56, 24.02, 56.27, 52.65,
    80.27, 73.92, 91.67, 86.18, 96.35, 90.54, 99.09, 92.98, 27.98, 26.28,
    61.59, 57.53, 87.60, 80.60, 100.36, 94.29, 105.50, 99.03, 108.48, 101.66,
    28.41, 26.44, 62.23, 57.55, 87.28, 80.38, 101.93, 94.97, 107.07, 99.64,
    109.94, 102.03, 26.46, 24.40, 57.61, 52.97, 80.42, 74.69, 95.00, 87.67,
    99.68, 91.90, 102.10, 93.99, 28.42, 26.17, 61.82, 56.83, 86.36, 80.37,
    102.06, 94.06, 107.06, 98.59, 109.61, 100.83, 28.31, 26.05, 61.47, 56.78,
    86.80, 81.50, 101.75, 93.57, 106.65, 98.12, 109.07, 100.47, 26.35, 24.41,
    57.40, 53.55, 82.28, 77.37, 94.65, 87.63, 99.25, 92.00, 101.60, 94.43,
    27.97, 25.96, 61.00, 57.01, 87.65, 82.35, 100.46, 93.18, 105.36, 97.85,
    107.90, 100.49, 28.03, 26.27, 61.51, 57.85, 88.86, 82.81, 100.59, 94.24,
    105.62, 99.05, 108.44, 101.86, 26.74, 25.15, 58.88, 55.24, 84.39, 77.88,
    95.91, 90.23, 100.80, 94.82, 103.65, 97.44, 28.25, 26.56, 62.20, 58.27,
    88.91, 81.95, 101.31, 95.29, 106.49, 100.12, 109.51, 102.85, 28.64, 26.75,
    62.87, 58.33, 88.54, 81.42, 102.75, 96.05, 107.97, 100.81, 110.93, 103.31,
    27.42, 25.36, 59.83, 55.07, 83.53, 77.31, 98.45, 91.12, 103.34, 95.53,
    105.93, 97.72, 28.73, 26.52, 62.60, 57.58, 87.38, 81.03, 103.15, 95.30,
    108.24, 99.90, 110.90, 102.17, 28.64, 26.33, 62.18, 57.29, 87.40, 81.86,
    102.90, 94.60, 107.88, 99.18, 110.34, 101.49, 27.14, 25.07, 59.04, 54.89,
    84.24, 79.25, 97.54, 90.03, 102.25, 94.48, 104.62, 96.90, 28.25, 26.14,
    61.50, 57.29, 87.99, 82.76, 101.50, 93.84, 106.42, 98.50, 108.91, 101.07,
    28.19, 26.35, 61.74, 58.00, 89.17, 83.37, 101.21, 94.52, 106.22, 99.33,
    108.97, 102.12, 27.23, 25.61, 59.92, 56.32, 86.21, 79.80, 97.67, 91.84,
    102.63, 96.53, 105.50, 99.25, 28.32, 26.64, 62.35, 58.55, 89.52, 82.72,
    101.59, 95.56, 106.76, 100.43, 109.77, 103.23, 28.70, 26.88, 63.08, 58.73,
    89.27, 82.07, 102.92, 96.48, 108.17, 101.30, 111.20, 103.90, 27.88, 25.87,
    60.96, 56.22, 85.24, 78.67, 100.07, 92.92, 105.08, 97.45, 107.81, 99.73,
    28.87, 26.73, 63.04, 58.07, 88.05, 81.40, 103.63, 96.04, 108.80, 100.71,
    111.56, 103.03, 28.84, 26.52, 62.65, 57.64, 87.74, 81.94, 103.60, 95.31,
    108.64, 99.91, 111.16, 102.19, 27.63, 25.45, 60.01, 55.60, 85.18, 80.10,
    99.28, 91.43, 104.06, 95.91, 106.43, 98.28, 28.46, 26.25, 61.85, 57.42,
    88.06, 82.84, 102.26, 94.28, 107.19, 98.93, 109.65, 101.42, 28.30, 26.37,
    61.86, 57.99, 89.18, 83.61, 101.65, 94.61, 106.64, 99.39, 109.30, 102.14,
    27.48, 25.82, 60.42, 56.84, 87.17, 80.95, 98.62, 92.60, 103.59, 97.34,
    106.43, 100.10, 28.34, 26.64, 62.34, 58.62, 89.81, 83.25, 101.67, 95.55,
    106.81, 100.44, 109.78, 103.28, 28.68, 26.93, 63.11, 58.95, 89.76, 82.59,
    102.85, 96.62, 108.10, 101.48, 111.17, 104.17, 28.12, 26.18, 61.61, 56.97,
    86.41, 79.57, 100.91, 94.02, 106.00, 98.64, 108.84, 101.00, 28.93, 26.88,
    63.30, 58.44, 88.61, 81.69, 103.81, 96.54, 109.03, 101.25, 111.89, 103.65,
    28.97, 26.68, 63.02, 57.94, 88.05, 81.94, 104.05, 95.89, 109.15, 100.51,
    111.75, 102.79, 27.97, 25.73, 60.72, 56.08, 85.75, 80.51, 100.50, 92.43,
    105.35, 96.93, 107.74, 99.25, 28.63, 26.36, 62.17, 57.53, 88.06, 82.76,
    102.89, 94.69, 107.84, 99.31, 110.29, 101.73, 28.41, 26.38, 61.97, 57.93,
    89.05, 83.66, 102.07, 94.67, 107.04, 99.42, 109.62, 102.09, 9.02, 8.31,
    19.59, 18.17, 27.86, 26.21, 32.40, 29.86, 33.96, 31.33, 34.74, 32.11,
    25.41, 23.47, 55.27, 51.37, 78.83, 74.16, 91.33, 84.28, 95.74, 88.44,
    97.95, 90.70, 26.16, 24.40, 57.23, 53.69, 82.56, 77.34, 93.95, 87.55,
    98.58, 91.99, 101.07, 94.55, 20.82, 19.57, 45.80, 43.08, 66.03, 61.25,
    74.72, 70.20, 78.49, 73.79, 80.67, 75.88, 27.40, 25.77, 60.31, 56.69,
    86.79, 80.36, 98.31, 92.44, 103.30, 97.16, 106.18, 99.89, 28.14, 26.40,
    61.90, 57.75, 87.89, 80.83, 100.91, 94.74, 106.07, 99.50, 109.06, 102.10,
    24.43, 22.71, 53.48, 49.41, 74.92, 69.04, 87.67, 81.58, 92.08, 85.58,
    94.51, 87.61, 28.72, 26.65, 62.80, 57.92, 87.83, 81.04, 103.08, 95.73,
    108.24, 100.40, 111.05, 102.75, 28.97, 26.67, 63.00, 57.92, 88.07, 82.07,
    104.07, 95.85, 109.16, 100.46, 111.73, 102.75, 25.70, 23.66, 55.82, 51.61,
    78.96, 74.18, 92.37, 84.99, 96.83, 89.13, 99.02, 91.29, 28.76, 26.49,
    62.47, 57.86, 88.63, 83.34, 103.34, 95.16, 108.32, 99.82, 110.79, 102.28,
    28.72, 26.70, 62.69, 58.66, 90.20, 84.68, 103.16, 95.80, 108.20, 100.62,
    110.85, 103.36, 26.29, 24.66, 57.73, 54.31, 83.37, 77.60, 94.34, 88.46,
    99.07, 92.98, 101.74, 95.62, 28.75, 27.00, 63.19, 59.44, 91.18, 84.70,
    103.15, 96.85, 108.35, 101.80, 111.32, 104.69, 29.18, 27.43, 64.24, 60.13,
    91.68, 84.44, 104.65, 98.40, 110.00, 103.38, 113.13, 106.17, 27.41, 25.57,
    60.12, 55.71, 84.53, 77.76, 98.32, 91.81, 103.31, 96.34, 106.12, 98.70,
    29.50, 27.47, 64.64, 59.79, 90.68, 83.49, 105.85, 98.65, 111.19, 103.49,
    114.17, 105.98, 29.69, 27.39, 64.66, 59.46, 90.27, 83.82, 106.63, 98.42,
    111.88, 103.17, 114.60, 105.51, 27.71, 25.48, 60.16, 55.47, 84.69, 79.40,
    99.57, 91.54, 104.38, 95.98, 106.75, 98.24, 29.40, 27.04, 63.82, 58.94,
    90.09, 84.58, 105.64, 97.15, 110.73, 101.87, 113.24, 104.31, 29.22, 27.07,
    63.66, 59.38, 91.23, 85.78, 104.99, 97.17, 110.08, 102.02, 112.69, 104.71,
    27.57, 25.80, 60.45, 56.82, 87.32, 81.55, 98.99, 92.56, 103.91, 97.28,
    106.63, 100.02, 29.08, 27.26, 63.82, 60.02, 92.20, 85.94, 104.39, 97.77,
    109.60, 102.76, 112.52, 105.67, 29.39, 27.65, 64.71, 60.72, 92.77, 85.64,
    105.41, 99.17, 110.79, 104.21, 113.92, 107.10, 28.31, 26.49, 62.21, 57.84,
    87.87, 80.78, 101.55, 95.11, 106.72, 99.84, 109.69, 102.37, 29.71, 27.76,
    65.23, 60.53, 91.88, 84.50, 106.59, 99.66, 112.01, 104.60, 115.09, 107.20,
    29.95, 27.70, 65.34, 60.15, 91.23, 84.43, 107.51, 99.52, 112.85, 104.34,
    115.68, 106.73, 28.55, 26.26, 62.02, 57.08, 86.96, 81.30, 102.59, 94.35,
    107.57, 98.90, 110.05, 101.18, 29.72, 27.32, 64.53, 59.44, 90.67, 84.92,
    106.78, 98.17, 111.95, 102.92, 114.50, 105.32, 29.49, 27.24, 64.14, 59.62,
    91.48, 86.07, 105.98, 97.80, 111.10, 102.63, 113.66, 105.26, 28.17, 26.28,
    61.63, 57.82, 88.92, 83.28, 101.17, 94.29, 106.15, 99.06, 108.84, 101.82,
    29.25, 27.33, 64.05, 60.17, 92.50, 86.50, 105.01, 98.05, 110.21, 103.03,
    113.05, 105.93, 29.44, 27.69, 64.80, 60.90, 93.25, 86.33, 105.63, 99.32,
    110.99, 104.39, 114.09, 107.33, 28.70, 26.93, 63.15, 58.91, 89.65, 82.45,
    102.94, 96.64, 108.20, 101.49, 111.25, 104.15, 29.77, 27.89, 65.44, 60.94,
    92.63, 85.17, 106.76, 100.10, 112.21, 105.10, 115.35, 107.80, 30.05, 27.88,
    65.71, 60.61, 91.89, 84.79, 107.85, 100.17, 113.26, 105.05, 116.20, 107.51,
    29.03, 26.72, 63.12, 58.04, 88.25, 82.23, 104.28, 96.03, 109.37, 100.66,
    111.95, 102.95, 29.92, 27.53, 65.02, 59.81, 91.04, 85.00, 107.50, 98.92,
    112.73, 103.68, 115.36, 106.05, 29.69, 27.36, 64.50, 59.75, 91.53, 86.06,
    106.71, 98.26, 111.85, 103.08, 114.40, 105.62, 28.55, 26.54, 62.31, 58.31,
    89.66, 84.18, 102.54, 95.23, 107.55, 100.02, 110.18, 102.74, 29.37, 27.36,
    64.18, 60.16, 92.51, 86.75, 105.48, 98.16, 110.65, 103.11, 113.41, 105.96,
    29.46, 27.67, 64.75, 60.91, 93.44, 86.79, 105.70, 99.24, 111.03, 104.32,
    114.07, 107.28, 28.89, 27.15, 63.60, 59.52, 90.75, 83.59, 103.61, 97.42,
    108.90, 102.34, 112.00, 105.11, 29.75, 27.93, 65.47, 61.17, 93.15, 85.72,
    106.69, 100.24, 112.14, 105.29, 115.32, 108.08, 30.08, 28.00, 65.90, 60.95,
    92.45, 85.12, 107.92, 100.58, 113.37, 105.52, 116.41, 108.05, 29.33, 27.05,
    63.87, 58.73, 89.17, 82.80, 105.33, 97.22, 110.51, 101.91, 113.20, 104.22,
    30.06, 27.69, 65.41, 60.13, 91.37, 85.02, 107.98, 99.53, 113.27, 104.32,
    115.97, 106.69, 29.86, 27.47, 64.84, 59.88, 91.53, 85.93, 107.32, 98.70,
    112.50, 103.50, 115.05, 105.97, 9.00, 8.33, 19.60, 18.26, 28.04, 26.38,
    32.35, 29.91, 33.92, 31.39, 34.71, 32.21, 25.39, 23.54, 55.33, 51.65,
    79.37, 74.62, 91.22, 84.49, 95.65, 88.71, 97.93, 91.06, 26.22, 24.56,
    57.51, 54.07, 83.09, 77.54, 94.14, 88.08, 98.83, 92.57, 101.43, 95.19,
    20.95, 19.71, 46.13, 43.31, 66.23, 61.20, 75.15, 70.69, 78.98, 74.30,
    81.21, 76.37, 27.58, 25.94, 60.73, 56.96, 86.99, 80.26, 98.93, 93.06,
    103.97, 97.80, 106.92, 100.49, 28.33, 26.49, 62.22, 57.81, 87.80, 80.72,
    101.61, 95.11, 106.78, 99.83, 109.74, 102.34, 24.53, 22.71, 53.55, 49.33,
    74.80, 69.15, 88.04, 81.59, 92.43, 85.55, 94.78, 87.53, 28.81, 26.63,
    62.84, 57.82, 87.72, 81.23, 103.44, 95.69, 108.57, 100.32, 111.27, 102.61,
    28.96, 26.63, 62.89, 57.90, 88.25, 82.56, 104.05, 95.68, 109.10, 100.30,
    111.60, 102.62, 25.66, 23.68, 55.78, 51.78, 79.41, 74.70, 92.21, 85.02,
    96.66, 89.21, 98.88, 91.46, 28.71, 26.53, 62.46, 58.10, 89.19, 83.90,
    103.17, 95.27, 108.16, 99.98, 110.67, 102.55, 28.75, 26.84, 62.92, 59.06,
    90.82, 85.02, 103.24, 96.29, 108.34, 101.17, 111.10, 104.00, 26.42, 24.84,
    58.12, 54.65, 83.73, 77.61, 94.78, 89.09, 99.58, 93.64, 102.35, 96.28,
    28.91, 27.19, 63.63, 59.79, 91.51, 84.66, 103.71, 97.53, 108.98, 102.51,
    112.03, 105.39, 29.39, 27.56, 64.64, 60.26, 91.66, 84.29, 105.40, 98.90,
    110.78, 103.86, 113.90, 106.56, 27.55, 25.59, 60.28, 55.65, 84.38, 77.79,
    98.86, 91.93, 103.82, 96.42, 106.55, 98.70, 29.63, 27.48, 64.76, 59.70,
    90.53, 83.58, 106.35, 98.71, 111.67, 103.51, 114.55, 105.92, 29.71, 27.34,
    64.58, 59.39, 90.34, 84.24, 106.73, 98.25, 111.93, 102.99, 114.56, 105.33,
    27.66, 25.47, 60.08, 55.59, 85.09, 79.97, 99.41, 91.49, 104.20, 95.96,
    106.57, 98.30, 29.35, 27.05, 63.76, 59.10, 90.57, 85.18, 105.46, 97.15,
    110.54, 101.91, 113.06, 104.45, 29.22, 27.18, 63.81, 59.75, 91.88, 86.22,
    104.95, 97.54, 110.09, 102.46, 112.80, 105.26, 27.68, 25.98, 60.81, 57.21,
    87.80, 81.66, 99.33, 93.19, 104.32, 97.95, 107.15, 100.73, 29.21, 27.45,
    64.23, 60.42, 92.65, 85.99, 104.82, 98.45, 110.11, 103.49, 113.14, 106.42,
    29.59, 27.81, 65.15, 60.93, 92.86, 85.50, 106.14, 99.77, 111.56, 104.81,
    114.73, 107.62, 28.48, 26.55, 62.45, 57.83, 87.73, 80.73, 102.19, 95.35,
    107.36, 100.05, 110.27, 102.48, 29.88, 27.80, 65.44, 60.49, 91.73, 84.49,
    107.21, 99.84, 112.62, 104.74, 115.61, 107.24, 30.00, 27.66, 65.31, 60.05,
    91.19, 84.74, 107.74, 99.39, 113.04, 104.18, 115.77, 106.55, 28.52, 26.22,
    61.91, 57.12, 87.25, 81.85, 102.48, 94.22, 107.43, 98.79, 109.86, 101.13,
    29.67, 27.30, 64.42, 59.53, 91.05, 85.51, 106.63, 98.08, 111.77, 102.86,
    114.30, 105.33, 29.46, 27.31, 64.21, 59.94, 92.11, 86.59, 105.85, 98.04,
    111.00, 102.94, 113.64, 105.68, 28.24, 26.45, 61.93, 58.23, 89.48, 83.50,
    101.38, 94.86, 106.43, 99.69, 109.23, 102.52, 29.34, 27.52, 64.41, 60.59,
    93.04, 86.66, 105.30, 98.69, 110.58, 103.73, 113.54, 106.68, 29.63, 27.87,
    65.25, 61.20, 93.46, 86.23, 106.29, 99.99, 111.72, 105.08, 114.88, 107.97,
    28.90, 27.02, 63.47, 58.97, 89.55, 82.34, 103.65, 97.01, 108.93, 101.83,
    111.94, 104.40, 29.96, 27.97, 65.74, 60.95, 92.50, 85.08, 107.47, 100.41,
    112.92, 105.38, 116.01, 107.98, 30.15, 27.86, 65.75, 60.50, 91.78, 85.00,
    108.23, 100.12, 113.60, 104.96, 116.43, 107.36, 29.02, 26.68, 63.02, 58.02,
    88.43, 82.73, 104.26, 95.87, 109.31, 100.50, 111.82, 102.82, 29.90, 27.49,
    64.91, 59.82, 91.30, 85.55, 107.43, 98.76, 112.62, 103.54, 115.18, 105.97,
    29.65, 27.40, 64.50, 60.00, 92.10, 86.65, 106.54, 98.38, 111.69, 103.25,
    114.28, 105.91, 28.58, 26.68, 62.55, 58.71, 90.28, 84.51, 102.62, 95.71,
    107.69, 100.57, 110.43, 103.38, 29.42, 27.52, 64.47, 60.58, 93.13, 87.02,
    105.64, 98.71, 110.88, 103.73, 113.76, 106.66, 29.62, 27.87, 65.21, 61.27,
    93.77, 86.75, 106.27, 99.95, 111.67, 105.05, 114.81, 108.00, 29.09, 27.28,
    63.99, 59.66, 90.74, 83.44, 104.34, 97.91, 109.67, 102.82, 112.76, 105.49,
    29.95, 28.05, 65.84, 61.26, 93.09, 85.58, 107.44, 100.68, 112.92, 105.70,
    116.07, 108.40, 30.21, 28.01, 66.02, 60.87, 92.29, 85.21, 108.43, 100.63,
    113.86, 105.53, 116.79, 107.98, 29.35, 27.01, 63.79, 58.66, 89.24, 83.22,
    105.42, 97.05, 110.57, 101.73, 113.16, 104.04, 30.06, 27.65, 65.31, 60.09,
    91.51, 85.50, 108.01, 99.35, 113.25, 104.14, 115.87, 106.53, 29.81, 27.48,
    64.77, 60.05, 92.02, 86.54, 107.14, 98.70, 112.30, 103.54, 114.86, 106.11,
    8.67, 8.06, 18.92, 17.70, 27.21, 25.56, 31.15, 28.91, 32.67, 30.37,
    33.46, 31.19, 24.47, 22.78, 53.45, 50.08, 77.02, 72.24, 87.88, 81.74,
    92.19, 85.86, 94.47, 88.22, 25.37, 23.83, 55.76, 52.45, 80.47, 74.79,
    91.04, 85.45, 95.62, 89.82, 98.23, 92.37, 20.32, 19.11, 44.75, 41.90,
    63.90, 58.87, 72.89, 68.55, 76.62, 72.02, 78.80, 73.97, 26.76, 25.14,
    58.91, 55.06, 83.87, 77.19, 95.98, 90.19, 100.89, 94.74, 103.75, 97.27,
    27.45, 25.57, 60.17, 55.68, 84.45, 77.74, 98.50, 91.84, 103.48, 96.36,
    106.26, 98.69, 23.69, 21.85, 51.59, 47.45, 72.02, 66.84, 85.05, 78.53,
    89.25, 82.32, 91.42, 84.19, 27.80, 25.62, 60.50, 55.62, 84.50, 78.58,
    99.85, 92.07, 104.75, 96.51, 107.26, 98.69, 27.86, 25.63, 60.49, 55.84,
    85.34, 80.09, 100.13, 92.08, 104.96, 96.55, 107.34, 98.85, 24.69, 22.87,
    53.78, 50.14, 77.03, 72.44, 88.72, 82.08, 93.02, 86.17, 95.22, 88.43,
    27.64, 25.64, 60.26, 56.29, 86.53, 81.32, 99.30, 92.04, 104.13, 96.65,
    106.63, 99.23, 27.78, 26.03, 60.94, 57.31, 88.05, 82.11, 99.71, 93.35,
    104.68, 98.11, 107.46, 100.90, 25.61, 24.09, 56.39, 52.93, 80.90, 74.70,
    91.87, 86.43, 96.55, 90.83, 99.28, 93.35, 28.04, 26.37, 61.74, 57.87,
    88.34, 81.46, 100.57, 94.60, 105.70, 99.40, 108.70, 102.12, 28.50, 26.64,
    62.58, 58.10, 88.21, 81.11, 102.24, 95.63, 107.44, 100.38, 110.40, 102.88,
    26.64, 24.65, 58.14, 53.53, 81.18, 75.10, 95.63, 88.56, 100.38, 92.85,
    102.91, 94.98, 28.63, 26.45, 62.42, 57.42, 87.13, 80.75, 102.80, 95.04,
    107.89, 99.63, 110.56, 101.90, 28.61, 26.30, 62.12, 57.21, 87.24, 81.67,
    102.79, 94.51, 107.77, 99.08, 110.23, 101.37, 26.61, 24.56, 57.86, 53.75,
    82.47, 77.58, 95.62, 88.21, 100.23, 92.56, 102.54, 94.92, 28.23, 26.11,
    61.44, 57.20, 87.83, 82.62, 101.45, 93.73, 106.35, 98.38, 108.84, 100.93,
    28.19, 26.34, 61.73, 57.97, 89.13, 83.38, 101.23, 94.48, 106.24, 99.28,
    108.96, 102.06, 26.81, 25.21, 58.99, 55.46, 84.94, 78.67, 96.18, 90.42,
    101.06, 95.04, 103.88, 97.72, 28.31, 26.63, 62.32, 58.54, 89.56, 82.80,
    101.56, 95.53, 106.72, 100.40, 109.73, 103.21, 28.71, 26.91, 63.14, 58.82,
    89.44, 82.24, 102.99, 96.59, 108.25, 101.43, 111.29, 104.05, 27.58, 25.60,
    60.31, 55.65, 84.38, 77.83, 98.97, 91.96, 103.93, 96.45, 106.64, 98.71,
    28.91, 26.78, 63.15, 58.19, 88.24, 81.52, 103.76, 96.23, 108.94, 100.90,
    111.73, 103.24, 28.92, 26.60, 62.84, 57.80, 87.95, 82.08, 103.88, 95.60,
    108.94, 100.21, 111.48, 102.49, 27.43, 25.26, 59.58, 55.17, 84.48, 79.42,
    98.57, 90.75, 103.32, 95.19, 105.67, 97.53, 28.54, 26.32, 62.02, 57.54,
    88.21, 82.97, 102.56, 94.52, 107.50, 99.17, 109.96, 101.65, 28.39, 26.43,
    62.03, 58.12, 89.38, 83.84, 101.98, 94.85, 106.98, 99.64, 109.63, 102.38,
    27.32, 25.66, 60.04, 56.49, 86.66, 80.54, 98.04, 92.02, 102.98, 96.73,
    105.79, 99.47, 28.40, 26.70, 62.47, 58.76, 90.06, 83.53, 101.91, 95.76,
    107.06, 100.65, 110.03, 103.50, 28.75, 27.01, 63.29, 59.15, 90.11, 82.93,
    103.13, 96.91, 108.40, 101.80, 111.47, 104.51, 28.01, 26.09, 61.38, 56.79,
    86.14, 79.30, 100.48, 93.68, 105.56, 98.29, 108.40, 100.67, 29.02, 26.98,
    63.52, 58.68, 88.97, 81.99, 104.12, 96.89, 109.37, 101.64, 112.26, 104.05,
    29.09, 26.81, 63.30, 58.20, 88.42, 82.23, 104.48, 96.33, 109.61, 100.97,
    112.23, 103.26, 27.92, 25.68, 60.61, 55.96, 85.51, 80.26, 100.33, 92.26,
    105.17, 96.74, 107.55, 99.04, 28.76, 26.47, 62.45, 57.74, 88.35, 83.01,
    103.35, 95.08, 108.33, 99.72, 110.78, 102.14, 28.54, 26.48, 62.23, 58.13,
    89.36, 83.98, 102.54, 95.05, 107.53, 99.81, 110.11, 102.48, 27.61, 25.87,
    60.58, 56.97, 87.52, 81.61, 99.11, 92.80, 104.06, 97.53, 106.82, 100.30,
    28.45, 26.69, 62.48, 58.78, 90.23, 83.98, 102.10, 95.74, 107.22, 100.63,
    110.12, 103.49, 28.73, 27.02, 63.27, 59.30, 90.52, 83.47, 103.05, 96.94,
    108.32, 101.86, 111.39, 104.65, 28.22, 26.37, 61.95, 57.52, 87.32, 80.30,
    101.22, 94.67, 106.36, 99.37, 109.30, 101.85, 29.04, 27.09, 63.70, 59.02,
    89.56, 82.39, 104.19, 97.28, 109.47, 102.08, 112.45, 104.58, 29.19, 26.96,
    63.64, 58.54, 88.83, 82.33, 104.81, 96.89, 110.00, 101.57, 112.72, 103.89,
    28.26, 25.98, 61.36, 56.51, 86.18, 80.68, 101.53, 93.35, 106.45, 97.86,
    108.88, 100.13, 28.93, 26.60, 62.81, 57.92, 88.44, 82.92, 103.97, 95.59,
    108.99, 100.22, 111.47, 102.58, 28.68, 26.52, 62.42, 58.11, 89.23, 83.94,
    103.06, 95.23, 108.05, 99.95, 110.57, 102.55, 9.08, 8.35, 19.71, 18.21,
    27.85, 26.16, 32.62, 30.01, 34.19, 31.47, 34.97, 32.22, 25.59, 23.56,
    55.57, 51.44, 78.77, 74.04, 91.95, 84.64, 96.38, 88.78, 98.57, 90.96,
    26.27, 24.41, 57.33, 53.61, 82.42, 77.42, 94.38, 87.59, 98.99, 91.99,
    101.39, 94.48, 20.83, 19.54, 45.74, 43.02, 66.07, 61.54, 74.78, 70.08,
    78.52, 73.66, 80.63, 75.75, 27.40, 25.73, 60.21, 56.64, 86.91, 80.79,
    98.32, 92.27, 103.27, 96.99, 106.08, 99.74, 28.09, 26.41, 61.84, 57.91,
    88.33, 81.39, 100.73, 94.73, 105.88, 99.53, 108.89, 102.23, 24.43, 22.80,
    53.60, 49.71, 75.43, 69.38, 87.63, 81.88, 92.08, 85.93, 94.60, 88.05,
    28.74, 26.77, 62.99, 58.30, 88.43, 81.39, 103.10, 96.15, 108.31, 100.88,
    111.23, 103.32, 29.10, 26.85, 63.39, 58.30, 88.49, 82.11, 104.49, 96.49,
    109.64, 101.15, 112.32, 103.45, 25.88, 23.79, 56.18, 51.78, 79.03, 74.05,
    92.99, 85.49, 97.48, 89.63, 99.70, 91.72, 28.95, 26.63, 62.86, 58.02,
    88.65, 83.19, 104.05, 95.67, 109.07, 100.32, 111.54, 102.70, 28.88, 26.73,
    62.88, 58.61, 90.03, 84.67, 103.75, 95.96, 108.78, 100.74, 111.34, 103.38,
    26.33, 24.63, 57.70, 54.22, 83.34, 77.88, 94.53, 88.34, 99.23, 92.83,
    101.80, 95.45, 28.78, 26.96, 63.12, 59.36, 91.20, 85.06, 103.29, 96.69,
    108.44, 101.62, 111.32, 104.50, 29.13, 27.41, 64.14, 60.21, 92.04, 85.01,
    104.49, 98.30, 109.82, 103.31, 112.92, 106.18, 27.38, 25.64, 60.18, 55.99,
    85.09, 78.23, 98.21, 92.03, 103.21, 96.62, 106.10, 99.08, 29.49, 27.56,
    64.75, 60.13, 91.30, 83.94, 105.77, 98.95, 111.15, 103.87, 114.22, 106.46,
    29.78, 27.56, 65.01, 59.87, 90.79, 83.97, 106.92, 99.04, 112.24, 103.84,
    115.08, 106.23, 27.88, 25.64, 60.57, 55.73, 84.87, 79.30, 100.18, 92.15,
    105.04, 96.59, 107.47, 98.81, 29.59, 27.20, 64.26, 59.17, 90.22, 84.44,
    106.32, 97.76, 111.47, 102.48, 114.02, 104.85, 29.40, 27.14, 63.93, 59.38,
    91.10, 85.70, 105.67, 97.47, 110.77, 102.27, 113.32, 104.87, 27.66, 25.78,
    60.47, 56.71, 87.22, 81.74, 99.33, 92.51, 104.21, 97.19, 106.83, 99.88,
    29.15, 27.22, 63.81, 59.92, 92.13, 86.20, 104.66, 97.66, 109.83, 102.62,
    112.65, 105.50, 29.36, 27.61, 64.59, 60.73, 93.02, 86.17, 105.32, 99.01,
    110.66, 104.07, 113.74, 107.01, 28.27, 26.53, 62.20, 58.07, 88.40, 81.32,
    101.38, 95.21, 106.56, 100.00, 109.58, 102.64, 29.68, 27.82, 65.26, 60.81,
    92.47, 85.03, 106.44, 99.84, 111.87, 104.84, 115.02, 107.55, 30.00, 27.86,
    65.62, 60.56, 91.82, 84.68, 107.66, 100.06, 113.07, 104.94, 116.02, 107.41,
    28.71, 26.44, 62.44, 57.41, 87.26, 81.25, 103.12, 95.00, 108.16, 99.58,
    110.73, 101.84, 29.89, 27.50, 64.97, 59.75, 90.92, 84.83, 107.39, 98.84,
    112.62, 103.60, 115.25, 105.96, 29.69, 27.34, 64.49, 59.70, 91.41, 85.93,
    106.70, 98.22, 111.84, 103.02, 114.39, 105.55, 28.29, 26.28, 61.73, 57.73,
    88.77, 83.37, 101.64, 94.33, 106.60, 99.06, 109.19, 101.74, 29.35, 27.32,
    64.12, 60.06, 92.37, 86.65, 105.42, 98.03, 110.59, 102.98, 113.32, 105.80,
    29.44, 27.64, 64.69, 60.86, 93.38, 86.80, 105.64, 99.14, 110.95, 104.21,
    113.98, 107.17, 28.65, 26.94, 63.08, 59.07, 90.10, 83.02, 102.76, 96.63,
    108.01, 101.53, 111.07, 104.28, 29.71, 27.91, 65.41, 61.15, 93.16, 85.75,
    106.57, 100.16, 112.02, 105.21, 115.20, 108.02, 30.07, 28.01, 65.91, 61.00,
    92.52, 85.16, 107.88, 100.61, 113.34, 105.56, 116.39, 108.11, 29.16, 26.91,
    63.52, 58.41, 88.66, 82.27, 104.70, 96.69, 109.86, 101.35, 112.55, 103.66,
    30.07, 27.71, 65.45, 60.17, 91.40, 84.99, 108.01, 99.60, 113.31, 104.40,
    116.03, 106.77, 29.90, 27.50, 64.91, 59.91, 91.54, 85.91, 107.44, 98.79,
    112.63, 103.59, 115.18, 106.05, 28.70, 26.57, 62.50, 58.26, 89.50, 84.17,
    103.13, 95.39, 108.12, 100.14, 110.67, 102.77, 29.51, 27.37, 64.33, 60.08,
    92.35, 86.79, 106.02, 98.25, 111.17, 103.16, 113.84, 105.92, 29.49, 27.62,
    64.68, 60.83, 93.45, 87.17, 105.84, 99.08, 111.12, 104.14, 114.07, 107.09,
    28.84, 27.13, 63.50, 59.61, 91.11, 84.15, 103.45, 97.32, 108.72, 102.28,
    111.79, 105.12, 29.69, 27.93, 65.39, 61.30, 93.59, 86.31, 106.51, 100.19,
    111.94, 105.28, 115.12, 108.17, 30.06, 28.10, 66.02, 61.30, 93.08, 85.58,
    107.84, 100.89, 113.33, 105.90, 116.45, 108.54, 29.42, 27.23, 64.22, 59.13,
    89.68, 82.94, 105.62, 97.83, 110.87, 102.57, 113.67, 104.93, 30.18, 27.88,
    65.80, 60.54, 91.85, 85.10, 108.35, 100.18, 113.72, 105.03, 116.54, 107.42,
    30.06, 27.64, 65.28, 60.12, 91.66, 85.79, 108.02, 99.32, 113.24, 104.11,
    115.84, 106.53, 9.06, 8.35, 19.69, 18.27, 28.00, 26.34, 32.56, 30.01,
    34.13, 31.48, 34.91, 32.27, 25.54, 23.59, 55.54, 51.63, 79.23, 74.53,
    91.77, 84.69, 96.20, 88.88, 98.43, 91.15, 26.29, 24.53, 57.51, 53.96,
    82.98, 77.72, 94.41, 87.99, 99.06, 92.45, 101.57, 95.02, 20.93, 19.67,
    46.03, 43.29, 66.36, 61.55, 75.09, 70.56, 78.89, 74.16, 81.07, 76.26,
    27.54, 25.90, 60.61, 56.97, 87.22, 80.75, 98.80, 92.90, 103.81, 97.65,
    106.72, 100.39, 28.28, 26.53, 62.21, 58.04, 88.32, 81.23, 101.42, 95.21,
    106.60, 99.99, 109.61, 102.61, 24.55, 22.83, 53.75, 49.65, 75.28, 69.38,
    88.10, 81.98, 92.54, 86.00, 94.98, 88.04, 28.86, 26.78, 63.11, 58.21,
    88.25, 81.44, 103.59, 96.20, 108.78, 100.89, 111.60, 103.25, 29.12, 26.80,
    63.31, 58.21, 88.51, 82.48, 104.58, 96.31, 109.69, 100.95, 112.28, 103.25,
    25.83, 23.77, 56.09, 51.86, 79.35, 74.56, 92.82, 85.40, 97.30, 89.57,
    99.50, 91.74, 28.90, 26.62, 62.77, 58.15, 89.08, 83.75, 103.84, 95.62,
    108.85, 100.31, 111.33, 102.79, 28.86, 26.83, 63.00, 58.95, 90.65, 85.11,
    103.67, 96.28, 108.73, 101.12, 111.39, 103.87, 26.42, 24.79, 58.02, 54.58,
    83.79, 77.98, 94.81, 88.90, 99.56, 93.45, 102.25, 96.10, 28.89, 27.14,
    63.51, 59.74, 91.64, 85.12, 103.67, 97.34, 108.89, 102.31, 111.88, 105.22,
    29.33, 27.56, 64.57, 60.42, 92.13, 84.85, 105.18, 98.89, 110.55, 103.90,
    113.70, 106.70, 27.54, 25.69, 60.42, 55.98, 84.94, 78.14, 98.82, 92.26,
    103.83, 96.82, 106.65, 99.19, 29.65, 27.60, 64.96, 60.08, 91.12, 83.90,
    106.38, 99.13, 111.75, 104.00, 114.74, 106.50, 29.84, 27.52, 64.98, 59.75,
    90.72, 84.24, 107.16, 98.90, 112.43, 103.67, 115.16, 106.02, 27.84, 25.60,
    60.45, 55.75, 85.11, 79.80, 100.06, 91.99, 104.89, 96.45, 107.27, 98.72,
    29.54, 27.17, 64.13, 59.23, 90.54, 85.00, 106.15, 97.62, 111.27, 102.37,
    113.80, 104.82, 29.36, 27.20, 63.97, 59.67, 91.69, 86.21, 105.50, 97.66,
    110.62, 102.52, 113.25, 105.24, 27.71, 25.93, 60.75, 57.10, 87.76, 81.95,
    99.48, 93.03, 104.43, 97.77, 107.16, 100.53, 29.23, 27.40, 64.14, 60.33,
    92.66, 86.36, 104.90, 98.26, 110.15, 103.28, 113.08, 106.21, 29.54, 27.78,
    65.04, 61.02, 93.23, 86.06, 105.94, 99.67, 111.34, 104.74, 114.50, 107.63,
    28.45, 26.63, 62.52, 58.12, 88.30, 81.18, 102.06, 95.58, 107.26, 100.34,
    110.24, 102.88, 29.86, 27.90, 65.55, 60.83, 92.33, 84.91, 107.13, 100.16,
    112.57, 105.12, 115.66, 107.73, 30.09, 27.83, 65.66, 60.44, 91.67, 84.84,
    108.04, 100.00, 113.41, 104.85, 116.25, 107.25, 28.69, 26.38, 62.32, 57.36,
    87.39, 81.71, 103.09, 94.81, 108.09, 99.39, 110.58, 101.67, 29.86, 27.45,
    64.84, 59.74, 91.12, 85.34, 107.30, 98.65, 112.49, 103.42, 115.06, 105.83,
    29.64, 27.37, 64.45, 59.92, 91.94, 86.50, 106.49, 98.28, 111.64, 103.14,
    114.22, 105.78, 28.31, 26.41, 61.93, 58.11, 89.36, 83.70, 101.67, 94.76,
    106.68, 99.56, 109.38, 102.33, 29.39, 27.47, 64.37, 60.47, 92.97, 86.93,
    105.52, 98.54, 110.75, 103.55, 113.61, 106.46, 29.59, 27.83, 65.12, 61.21,
    93.71, 86.75, 106.16, 99.82, 111.54, 104.92, 114.66, 107.87, 28.85, 27.06,
    63.46, 59.20, 90.09, 82.85, 103.46, 97.12, 108.74, 102.00, 111.81, 104.67,
    29.92, 28.03, 65.77, 61.24, 93.09, 85.58, 107.30, 100.60, 112.77, 105.62,
    115.93, 108.34, 30.20, 28.02, 66.03, 60.90, 92.34, 85.21, 108.39, 100.66,
    113.82, 105.57, 116.77, 108.03, 29.17, 26.85, 63.43, 58.32, 88.68, 82.65,
    104.79, 96.50, 109.91, 101.15, 112.50, 103.45, 30.07, 27.66, 65.34, 60.10,
    91.49, 85.43, 108.03, 99.40, 113.29, 104.19, 115.92, 106.57, 29.84, 27.49,
    64.82, 60.05, 91.99, 86.49, 107.23, 98.75, 112.40, 103.58, 114.96, 106.14,
    28.69, 26.67, 62.62, 58.60, 90.11, 84.60, 103.05, 95.71, 108.08, 100.52,
    110.72, 103.26, 29.51, 27.49, 64.50, 60.46, 92.98, 87.18, 106.00, 98.65,
    111.20, 103.63, 113.97, 106.49, 29.60, 27.81, 65.08, 61.22, 93.90, 87.22,
    106.23, 99.74, 111.59, 104.84, 114.64, 107.82, 29.03, 27.29, 63.92, 59.82,
    91.20, 83.99, 104.13, 97.90, 109.45, 102.86, 112.56, 105.63, 29.90, 28.07,
    65.80, 61.47, 93.61, 86.13, 107.23, 100.74, 112.71, 105.81, 115.90, 108.62,
    30.23, 28.14, 66.23, 61.25, 92.90, 85.54, 108.46, 101.07, 113.94, 106.03,
    116.99, 108.58, 29.48, 27.18, 64.18, 59.02, 89.61, 83.21, 105.85, 97.69,
    111.06, 102.40, 113.75, 104.73, 30.21, 27.83, 65.73, 60.43, 91.82, 85.44,
    108.51, 100.01, 113.83, 104.83, 116.54, 107.21, 30.01, 27.61, 65.16, 60.17,
    91.99, 86.37, 107.85, 99.18, 113.05, 104.00, 115.61, 106.49, 8.74, 8.09,
    19.03, 17.73, 27.24, 25.62, 31.41, 29.04, 32.93, 30.49, 33.71, 31.28,
    24.65, 22.86, 53.73, 50.16, 77.08, 72.46, 88.58, 82.04, 92.88, 86.14,
    95.10, 88.44, 25.47, 23.85, 55.85, 52.51, 80.69, 75.30, 91.42, 85.54,
    95.97, 89.90, 98.50, 92.45, 20.35, 19.14, 44.80, 42.06, 64.31, 59.42,
    72.98, 68.66, 76.70, 72.16, 78.86, 74.16, 26.79, 25.19, 58.98, 55.31,
    84.47, 77.93, 96.07, 90.38, 100.98, 94.97, 103.84, 97.59, 27.51, 25.73,
    60.42, 56.14, 85.25, 78.38, 98.68, 92.36, 103.70, 96.95, 106.57, 99.38,
    23.82, 22.05, 52.00, 47.90, 72.64, 67.15, 85.50, 79.23, 89.76, 83.07,
    92.03, 84.99, 27.98, 25.86, 61.02, 56.15, 85.18, 78.89, 100.45, 92.92,
    105.43, 97.41, 108.05, 99.64, 28.12, 25.85, 61.07, 56.23, 85.70, 80.18,
    101.04, 92.91, 105.93, 97.39, 108.37, 99.64, 24.92, 22.99, 54.16, 50.29,
    77.12, 72.55, 89.54, 82.56, 93.86, 86.63, 96.01, 88.82, 27.88, 25.76,
    60.65, 56.42, 86.61, 81.48, 100.18, 92.51, 105.02, 97.09, 107.46, 99.59,
    27.92, 26.06, 61.10, 57.36, 88.20, 82.56, 100.25, 93.51, 105.20, 98.25,
    107.89, 101.00, 25.66, 24.12, 56.44, 53.07, 81.31, 75.36, 92.05, 86.52,
    96.71, 90.94, 99.40, 93.51, 28.08, 26.41, 61.80, 58.07, 88.86, 82.21,
    100.71, 94.72, 105.83, 99.56, 108.80, 102.35, 28.54, 26.76, 62.77, 58.52,
    89.01, 81.85, 102.36, 96.04, 107.58, 100.86, 110.61, 103.48, 26.75, 24.85,
    58.53, 54.04, 81.93, 75.54, 96.00, 89.26, 100.82, 93.63, 103.47, 95.84,
    28.78, 26.68, 62.88, 57.97, 87.90, 81.16, 103.28, 95.85, 108.45, 100.51,
    111.24, 102.85, 28.85, 26.55, 62.71, 57.67, 87.72, 81.81, 103.64, 95.40,
    108.69, 100.00, 111.24, 102.28, 26.86, 24.73, 58.34, 53.98, 82.63, 77.66,
    96.53, 88.84, 101.18, 93.18, 103.48, 95.45, 28.49, 26.27, 61.91, 57.40,
    87.96, 82.72, 102.40, 94.33, 107.33, 98.96, 109.79, 101.43, 28.37, 26.40,
    61.96, 58.02, 89.23, 83.73, 101.92, 94.73, 106.90, 99.50, 109.54, 102.22,
    26.88, 25.23, 59.06, 55.56, 85.26, 79.29, 96.46, 90.50, 101.31, 95.13,
    104.06, 97.83, 28.37, 26.66, 62.38, 58.68, 89.97, 83.50, 101.79, 95.62,
    106.93, 100.50, 109.88, 103.35, 28.74, 27.00, 63.27, 59.17, 90.18, 83.02,
    103.08, 96.89, 108.35, 101.79, 111.42, 104.51, 27.66, 25.78, 60.65, 56.15,
    85.19, 78.39, 99.24, 92.59, 104.27, 97.15, 107.08, 99.52, 29.02, 26.99,
    63.54, 58.73, 89.07, 82.04, 104.12, 96.95, 109.37, 101.71, 112.27, 104.14,
    29.13, 26.86, 63.42, 58.31, 88.55, 82.30, 104.63, 96.51, 109.77, 101.16,
    112.41, 103.46, 27.69, 25.46, 60.12, 55.47, 84.73, 79.49, 99.51, 91.49,
    104.31, 95.93, 106.68, 98.20, 28.81, 26.51, 62.56, 57.81, 88.42, 83.04,
    103.54, 95.24, 108.53, 99.88, 110.99, 102.28, 28.61, 26.53, 62.35, 58.21,
    89.46, 84.09, 102.79, 95.21, 107.78, 99.97, 110.35, 102.63, 27.42, 25.68,
    60.15, 56.55, 86.90, 81.09, 98.45, 92.12, 103.35, 96.82, 106.08, 99.56,
    28.49, 26.72, 62.55, 58.84, 90.36, 84.15, 102.26, 95.84, 107.38, 100.74,
    110.27, 103.60, 28.78, 27.07, 63.37, 59.43, 90.76, 83.73, 103.23, 97.11,
    108.49, 102.04, 111.57, 104.85, 28.06, 26.24, 61.64, 57.26, 86.96, 79.95,
    100.66, 94.21, 105.78, 98.89, 108.71, 101.38, 29.09, 27.16, 63.84, 59.19,
    89.82, 82.62, 104.37, 97.51, 109.66, 102.33, 112.66, 104.85, 29.27, 27.06,
    63.84, 58.75, 89.12, 82.54, 105.10, 97.22, 110.31, 101.92, 113.06, 104.25,
    28.18, 25.91, 61.19, 56.34, 85.87, 80.34, 101.24, 93.09, 106.14, 97.59,
    108.58, 99.84, 29.03, 26.69, 63.03, 58.09, 88.66, 83.08, 104.31, 95.90,
    109.35, 100.54, 111.84, 102.90, 28.79, 26.61, 62.63, 58.27, 89.45, 84.15,
    103.45, 95.53, 108.45, 100.26, 110.97, 102.84, 27.75, 25.91, 60.74, 57.02,
    87.68, 82.07, 99.65, 92.95, 104.57, 97.67, 107.24, 100.40, 28.57, 26.72,
    62.61, 58.83, 90.44, 84.51, 102.58, 95.86, 107.67, 100.74, 110.47, 103.58,
    28.77, 27.06, 63.33, 59.50, 91.06, 84.24, 103.21, 97.06, 108.45, 102.02,
    111.49, 104.88, 28.25, 26.49, 62.14, 57.93, 88.11, 81.02, 101.33, 95.08,
    106.51, 99.85, 109.51, 102.44, 29.09, 27.24, 63.94, 59.48, 90.39, 83.10,
    104.34, 97.77, 109.66, 102.65, 112.72, 105.26, 29.34, 27.20, 64.11, 59.10,
    89.62, 82.75, 105.30, 97.72, 110.57, 102.47, 113.41, 104.86, 28.50, 26.22,
    61.94, 56.96, 86.65, 80.81, 102.37, 94.24, 107.36, 98.78, 109.88, 101.03,
    29.19, 26.85, 63.41, 58.35, 88.86, 83.03, 104.88, 96.47, 109.97, 101.12,
    112.51, 103.44, 28.95, 26.68, 62.90, 58.31, 89.37, 84.05, 104.03, 95.84,
    109.04, 100.54, 111.53, 103.04, 9.13, 8.40, 19.83, 18.27, 27.87, 26.11,
    32.82, 30.18, 34.41, 31.64, 35.20, 32.37, 25.75, 23.68, 55.91, 51.57,
    78.77, 73.88, 92.54, 85.08, 97.00, 89.21, 99.21, 91.31, 26.41, 24.44,
    57.49, 53.55, 82.25, 77.36, 94.90, 87.73, 99.49, 92.08, 101.83, 94.48,
    20.87, 19.50, 45.70, 42.93, 66.00, 61.72, 74.92, 69.97, 78.63, 73.52,
    80.66, 75.59, 27.42, 25.67, 60.13, 56.53, 86.87, 81.08, 98.44, 92.09,
    103.34, 96.78, 106.06, 99.52, 28.03, 26.37, 61.71, 57.95, 88.62, 81.90,
    100.55, 94.59, 105.67, 99.41, 108.65, 102.18, 24.39, 22.85, 53.62, 49.93,
    75.90, 69.78, 87.48, 82.02, 91.95, 86.12, 94.52, 88.33, 28.70, 26.85,
    63.05, 58.59, 88.99, 81.82, 102.96, 96.38, 108.20, 101.18, 111.21, 103.72,
    29.17, 27.01, 63.69, 58.67, 88.97, 82.24, 104.70, 97.05, 109.92, 101.76,
    112.72, 104.11, 26.03, 23.94, 56.55, 52.02, 79.18, 73.93, 93.50, 86.03,
    98.05, 90.17, 100.32, 92.23, 29.13, 26.78, 63.26, 58.24, 88.76, 83.02,
    104.66, 96.24, 109.73, 100.89, 112.26, 103.22, 29.05, 26.80, 63.14, 58.61,
    89.87, 84.54, 104.39, 96.24, 109.42, 100.98, 111.93, 103.52, 26.41, 24.60,
    57.71, 54.10, 83.19, 78.01, 94.84, 88.26, 99.50, 92.72, 101.98, 95.28,
    28.84, 26.92, 63.10, 59.23, 91.07, 85.27, 103.55, 96.56, 108.66, 101.46,
    111.42, 104.29, 29.09, 27.35, 64.00, 60.18, 92.22, 85.49, 104.38, 98.10,
    109.66, 103.11, 112.71, 106.03, 27.32, 25.66, 60.14, 56.18, 85.55, 78.72,
    98.00, 92.06, 103.01, 96.70, 105.92, 99.27, 29.43, 27.60, 64.74, 60.37,
    91.83, 84.45, 105.56, 99.07, 110.96, 104.03, 114.08, 106.74, 29.82, 27.70,
    65.25, 60.25, 91.35, 84.21, 107.00, 99.51, 112.38, 104.38, 115.34, 106.85,
    28.02, 25.81, 60.95, 56.04, 85.15, 79.23, 100.63, 92.74, 105.56, 97.21,
    108.07, 99.42, 29.75, 27.38, 64.67, 59.46, 90.45, 84.33, 106.86, 98.38,
    112.08, 103.12, 114.71, 105.47, 29.59, 27.24, 64.27, 59.45, 91.00, 85.52,
    106.35, 97.87, 111.47, 102.64, 114.00, 105.15, 27.77, 25.78, 60.57, 56.61,
    87.03, 81.77, 99.77, 92.53, 104.63, 97.17, 107.16, 99.78, 29.25, 27.21,
    63.86, 59.79, 91.95, 86.30, 105.06, 97.62, 110.20, 102.54, 112.90, 105.34,
    29.35, 27.55, 64.47, 60.65, 93.09, 86.59, 105.31, 98.79, 110.60, 103.84,
    113.60, 106.79, 28.20, 26.52, 62.10, 58.19, 88.79, 81.84, 101.16, 95.15,
    106.32, 99.97, 109.34, 102.70, 29.61, 27.83, 65.19, 60.98, 92.94, 85.57,
    106.20, 99.84, 111.63, 104.88, 114.80, 107.70, 30.00, 27.97, 65.78, 60.92,
    92.41, 85.04, 107.62, 100.43, 113.07, 105.38, 116.13, 107.95, 28.81, 26.60,
    62.79, 57.76, 87.65, 81.28, 103.46, 95.60, 108.57, 100.22, 111.24, 102.50,
    30.02, 27.68, 65.36, 60.10, 91.26, 84.80, 107.82, 99.48, 113.13, 104.27,
    115.86, 106.64, 29.88, 27.48, 64.88, 59.85, 91.41, 85.74, 107.38, 98.73,
    112.57, 103.52, 115.12, 105.96, 28.44, 26.31, 61.91, 57.67, 88.57, 83.31,
    102.19, 94.47, 107.14, 99.16, 109.65, 101.75, 29.49, 27.33, 64.25, 59.97,
    92.16, 86.64, 105.94, 98.11, 111.08, 103.01, 113.73, 105.74, 29.46, 27.59,
    64.61, 60.74, 93.34, 87.12, 105.76, 98.95, 111.03, 103.99, 113.95, 106.93,
    28.59, 26.90, 62.95, 59.11, 90.40, 83.54, 102.57, 96.49, 107.79, 101.40,
    110.83, 104.23, 29.65, 27.89, 65.29, 61.24, 93.53, 86.30, 106.35, 100.05,
    111.78, 105.13, 114.94, 108.03, 30.04, 28.09, 65.98, 61.31, 93.11, 85.61,
    107.74, 100.85, 113.22, 105.86, 116.36, 108.53, 29.23, 27.06, 63.82, 58.79,
    89.15, 82.40, 104.91, 97.24, 110.14, 101.96, 112.94, 104.31, 30.17, 27.89,
    65.80, 60.55, 91.86, 85.06, 108.31, 100.20, 113.68, 105.05, 116.52, 107.46,
    30.08, 27.66, 65.33, 60.14, 91.66, 85.74, 108.08, 99.38, 113.32, 104.18,
    115.92, 106.59, 28.87, 26.64, 62.76, 58.26, 89.34, 84.04, 103.76, 95.66,
    108.76, 100.37, 111.26, 102.90, 29.67, 27.42, 64.55, 60.04, 92.16, 86.70,
    106.63, 98.45, 111.78, 103.32, 114.38, 105.98, 29.55, 27.58, 64.66, 60.69,
    93.33, 87.37, 106.11, 98.95, 111.34, 103.97, 114.18, 106.87, 28.80, 27.08,
    63.36, 59.58, 91.29, 84.63, 103.34, 97.12, 108.57, 102.08, 111.58, 104.97,
    29.64, 27.88, 65.25, 61.31, 93.84, 86.83, 106.34, 100.01, 111.74, 105.11,
    114.88, 108.06, 30.01, 28.14, 66.01, 61.55, 93.62, 86.10, 107.63, 101.00,
    113.13, 106.07, 116.32, 108.83, 29.45, 27.37, 64.45, 59.51, 90.23, 83.18,
    105.70, 98.30, 111.01, 103.10, 113.93, 105.54, 30.23, 28.04, 66.08, 60.93,
    92.38, 85.28, 108.52, 100.72, 113.95, 105.63, 116.89, 108.09, 30.22, 27.81,
    65.70, 60.41, 91.89, 85.68, 108.57, 99.95, 113.86, 104.77, 116.53, 107.15,
    9.12, 8.39, 19.79, 18.29, 27.98, 26.28, 32.76, 30.13, 34.34, 31.60,
    35.12, 32.36, 25.70, 23.66, 55.81, 51.67, 79.11, 74.37, 92.34, 85.00,
    96.79, 89.16, 98.99, 91.35, 26.39, 24.51, 57.57, 53.85, 82.79, 77.75,
    94.79, 87.97, 99.41, 92.39, 101.83, 94.89, 20.92, 19.63, 45.94, 43.21,
    66.36, 61.80, 75.10, 70.39, 78.86, 73.98, 80.98, 76.08, 27.52, 25.84,
    60.47, 56.89, 87.29, 81.13, 98.75, 92.68, 103.72, 97.42, 106.55, 100.18,
    28.21, 26.52, 62.11, 58.16, 88.71, 81.73, 101.17, 95.15, 106.34, 99.97,
    109.37, 102.68, 24.54, 22.90, 53.84, 49.92, 75.75, 69.68, 88.02, 82.23,
    92.49, 86.30, 95.01, 88.43, 28.86, 26.89, 63.26, 58.55, 88.80, 81.74,
    103.55, 96.56, 108.79, 101.31, 111.72, 103.77, 29.22, 26.97, 63.66, 58.55,
    88.87, 82.46, 104.94, 96.90, 110.11, 101.58, 112.80, 103.89, 25.99, 23.89,
    56.42, 52.01, 79.37, 74.38, 93.38, 85.85, 97.90, 90.01, 100.13, 92.12,
    29.08, 26.74, 63.13, 58.27, 89.03, 83.55, 104.49, 96.08, 109.53, 100.74,
    112.01, 103.14, 29.00, 26.85, 63.15, 58.87, 90.43, 85.05, 104.19, 96.38,
    109.24, 101.18, 111.82, 103.83, 26.44, 24.73, 57.95, 54.45, 83.71, 78.22,
    94.94, 88.73, 99.65, 93.24, 102.25, 95.87, 28.90, 27.08, 63.40, 59.62,
    91.60, 85.43, 103.74, 97.12, 108.91, 102.07, 111.80, 104.96, 29.26, 27.53,
    64.42, 60.47, 92.43, 85.37, 104.95, 98.74, 110.30, 103.76, 113.42, 106.64,
    27.50, 25.75, 60.44, 56.23, 85.45, 78.56, 98.64, 92.42, 103.67, 97.03,
    106.56, 99.51, 29.62, 27.68, 65.03, 60.38, 91.68, 84.30, 106.23, 99.38,
    111.64, 104.31, 114.72, 106.92, 29.91, 27.68, 65.29, 60.12, 91.18, 84.33,
    107.38, 99.46, 112.73, 104.28, 115.57, 106.68, 28.00, 25.75, 60.83, 55.97,
    85.24, 79.65, 100.60, 92.54, 105.49, 97.00, 107.93, 99.23, 29.72, 27.32,
    64.53, 59.43, 90.61, 84.81, 106.77, 98.17, 111.94, 102.92, 114.51, 105.30,
    29.53, 27.26, 64.21, 59.64, 91.50, 86.07, 106.12, 97.89, 111.24, 102.71,
    113.80, 105.32, 27.78, 25.90, 60.74, 56.96, 87.60, 82.09, 99.76, 92.91,
    104.66, 97.61, 107.29, 100.32, 29.27, 27.34, 64.09, 60.18, 92.53, 86.58,
    105.11, 98.09, 110.31, 103.07, 113.14, 105.96, 29.49, 27.73, 64.88, 61.00,
    93.42, 86.54, 105.78, 99.45, 111.14, 104.53, 114.24, 107.48, 28.39, 26.65,
    62.47, 58.32, 88.77, 81.66, 101.83, 95.63, 107.03, 100.44, 110.06, 103.08,
    29.81, 27.94, 65.55, 61.07, 92.87, 85.39, 106.91, 100.28, 112.36, 105.30,
    115.52, 108.02, 30.13, 27.97, 65.90, 60.82, 92.21, 85.05, 108.13, 100.49,
    113.56, 105.39, 116.52, 107.87, 28.83, 26.55, 62.70, 57.65, 87.63, 81.61,
    103.56, 95.40, 108.62, 100.00, 111.20, 102.27, 30.02, 27.62, 65.25, 60.01,
    91.31, 85.20, 107.85, 99.26, 113.10, 104.04, 115.74, 106.41, 29.82, 27.46,
    64.76, 59.96, 91.81, 86.31, 107.16, 98.64, 112.32, 103.47, 114.87, 106.00,
    28.41, 26.40, 62.00, 57.99, 89.16, 83.73, 102.07, 94.74, 107.05, 99.49,
    109.65, 102.19, 29.48, 27.44, 64.39, 60.33, 92.77, 87.03, 105.87, 98.46,
    111.06, 103.43, 113.81, 106.27, 29.57, 27.76, 64.97, 61.13, 93.79, 87.17,
    106.10, 99.58, 111.44, 104.67, 114.48, 107.64, 28.78, 27.05, 63.36, 59.33,
    90.49, 83.37, 103.21, 97.06, 108.48, 101.97, 111.56, 104.74, 29.85, 28.04,
    65.70, 61.41, 93.56, 86.11, 107.04, 100.59, 112.51, 105.67, 115.70, 108.49,
    30.20, 28.14, 66.19, 61.26, 92.91, 85.53, 108.35, 101.04, 113.83, 106.01,
    116.89, 108.57, 29.28, 27.02, 63.79, 58.66, 89.04, 82.63, 105.15, 97.10,
    110.33, 101.78, 113.03, 104.09, 30.20, 27.83, 65.73, 60.43, 91.80, 85.36,
    108.47, 100.02, 113.80, 104.84, 116.52, 107.22, 30.03, 27.61, 65.19, 60.17,
    91.94, 86.28, 107.90, 99.22, 113.10, 104.03, 115.67, 106.51, 28.82, 26.69,
    62.77, 58.52, 89.89, 84.54, 103.56, 95.80, 108.58, 100.57, 111.15, 103.21,
    29.64, 27.49, 64.61, 60.34, 92.76, 87.17, 106.47, 98.67, 111.65, 103.61,
    114.33, 106.38, 29.61, 27.75, 64.97, 61.09, 93.86, 87.54, 106.30, 99.52,
    111.61, 104.59, 114.56, 107.56, 28.97, 27.25, 63.78, 59.87, 91.51, 84.51,
    103.90, 97.75, 109.20, 102.73, 112.29, 105.58, 29.83, 28.05, 65.68, 61.56,
    93.99, 86.67, 106.98, 100.63, 112.44, 105.74, 115.63, 108.64, 30.20, 28.22,
    66.30, 61.56, 93.47, 85.95, 108.31, 101.32, 113.82, 106.35, 116.96, 109.01,
    29.55, 27.34, 64.49, 59.38, 90.06, 83.30, 106.07, 98.24, 111.35, 103.01,
    114.16, 105.37, 30.31, 28.00, 66.08, 60.79, 92.24, 85.47, 108.82, 100.61,
    114.21, 105.47, 117.04, 107.88, 30.19, 27.76, 65.56, 60.37, 92.06, 86.17,
    108.47, 99.74, 113.73, 104.56, 116.33, 106.98, 8.82, 8.13, 19.16, 17.77,
    27.25, 25.63, 31.68, 29.20, 33.21, 30.63, 33.97, 31.40, 24.85, 22.95,
    54.05, 50.24, 77.10, 72.54, 89.30, 82.42, 93.61, 86.49, 95.78, 88.70,
    25.58, 23.87, 55.97, 52.51, 80.75, 75.63, 91.87, 85.63, 96.40, 89.97,
    98.84, 92.47, 20.37, 19.15, 44.80, 42.13, 64.57, 59.89, 73.08, 68.67,
    76.77, 72.18, 78.90, 74.22, 26.80, 25.21, 58.98, 55.44, 84.88, 78.57,
    96.15, 90.41, 101.03, 95.03, 103.86, 97.70, 27.52, 25.82, 60.54, 56.48,
    85.94, 79.04, 98.70, 92.65, 103.74, 97.31, 106.67, 99.85, 23.89, 22.21,
    52.30, 48.31, 73.25, 67.51, 85.74, 79.78, 90.05, 83.68, 92.43, 85.67,
    28.09, 26.06, 61.41, 56.64, 85.87, 79.25, 100.81, 93.61, 105.86, 98.17,
    108.60, 100.47, 28.33, 26.08, 61.60, 56.64, 86.13, 80.26, 101.77, 93.72,
    106.74, 98.23, 109.25, 100.46, 25.13, 23.13, 54.58, 50.47, 77.22, 72.56,
    90.32, 83.10, 94.67, 87.15, 96.82, 89.27, 28.12, 25.91, 61.08, 56.59,
    86.69, 81.51, 101.04, 93.05, 105.91, 97.61, 108.33, 100.02, 28.08, 26.11,
    61.30, 57.37, 88.22, 82.82, 100.88, 93.69, 105.81, 98.41, 108.39, 101.09,
    25.71, 24.12, 56.46, 53.12, 81.54, 75.88, 92.26, 86.52, 96.89, 90.94,
    99.51, 93.52, 28.11, 26.41, 61.80, 58.14, 89.18, 82.82, 100.89, 94.73,
    105.97, 99.57, 108.88, 102.39, 28.54, 26.82, 62.83, 58.80, 89.65, 82.56,
    102.36, 96.24, 107.59, 101.11, 110.65, 103.83, 26.81, 25.00, 58.79, 54.47,
    82.65, 76.04, 96.17, 89.78, 101.04, 94.21, 103.79, 96.52, 28.85, 26.86,
    63.21, 58.46, 88.66, 81.64, 103.52, 96.47, 108.75, 101.20, 111.66, 103.64,
    29.04, 26.78, 63.23, 58.14, 88.27, 81.98, 104.27, 96.23, 109.41, 100.88,
    112.06, 103.16, 27.09, 24.91, 58.82, 54.25, 82.83, 77.66, 97.36, 89.51,
    102.06, 93.85, 104.38, 96.06, 28.74, 26.44, 62.40, 57.64, 88.11, 82.73,
    103.29, 94.99, 108.27, 99.61, 110.73, 102.00, 28.57, 26.47, 62.25, 58.07,
    89.23, 83.90, 102.66, 95.03, 107.64, 99.77, 110.20, 102.41, 26.97, 25.24,
    59.12, 55.57, 85.41, 79.75, 96.81, 90.53, 101.62, 95.14, 104.29, 97.83,
    28.44, 26.66, 62.42, 58.71, 90.18, 84.04, 102.08, 95.63, 107.19, 100.51,
    110.05, 103.36, 28.74, 27.04, 63.29, 59.38, 90.72, 83.74, 103.10, 96.99,
    108.36, 101.93, 111.43, 104.74, 27.69, 25.91, 60.84, 56.56, 85.92, 78.99,
    99.32, 93.01, 104.38, 97.64, 107.29, 100.11, 29.06, 27.15, 63.79, 59.19,
    89.84, 82.62, 104.25, 97.46, 109.55, 102.29, 112.56, 104.83, 29.29, 27.08,
    63.89, 58.81, 89.20, 82.56, 105.14, 97.31, 110.36, 102.02, 113.12, 104.36,
    27.92, 25.67, 60.64, 55.81, 85.04, 79.52, 100.31, 92.25, 105.18, 96.71,
    107.60, 98.93, 29.06, 26.71, 63.09, 58.13, 88.67, 83.05, 104.41, 95.99,
    109.46, 100.64, 111.96, 102.98, 28.84, 26.64, 62.72, 58.31, 89.48, 84.18,
    103.62, 95.64, 108.63, 100.37, 111.14, 102.94, 27.55, 25.70, 60.27, 56.55,
    86.97, 81.45, 98.93, 92.22, 103.81, 96.89, 106.44, 99.59, 28.60, 26.73,
    62.64, 58.85, 90.47, 84.59, 102.69, 95.90, 107.77, 100.77, 110.56, 103.61,
    28.80, 27.08, 63.38, 59.57, 91.19, 84.42, 103.31, 97.14, 108.55, 102.10,
    111.59, 104.98, 28.07, 26.34, 61.76, 57.61, 87.66, 80.62, 100.68, 94.51,
    105.83, 99.26, 108.82, 101.85, 29.11, 27.27, 64.00, 59.59, 90.58, 83.28,
    104.42, 97.89, 109.75, 102.78, 112.82, 105.42, 29.39, 27.27, 64.25, 59.26,
    89.85, 82.92, 105.48, 97.95, 110.76, 102.72, 113.63, 105.12, 28.39, 26.13,
    61.72, 56.75, 86.30, 80.43, 101.97, 93.90, 106.95, 98.42, 109.47, 100.66,
    29.26, 26.91, 63.58, 58.48, 89.03, 83.13, 105.12, 96.72, 110.23, 101.38,
    112.79, 103.70, 29.03, 26.75, 63.07, 58.44, 89.52, 84.18, 104.34, 96.09,
    109.37, 100.79, 111.86, 103.29, 27.91, 25.95, 60.94, 57.03, 87.70, 82.33,
    100.27, 93.14, 105.17, 97.82, 107.75, 100.49, 28.72, 26.75, 62.77, 58.84,
    90.49, 84.84, 103.14, 96.00, 108.21, 100.85, 110.91, 103.63, 28.81, 27.07,
    63.33, 59.58, 91.38, 84.87, 103.38, 97.07, 108.59, 102.03, 111.57, 104.93,
    28.25, 26.56, 62.21, 58.21, 88.75, 81.73, 101.34, 95.28, 106.52, 100.10,
    109.54, 102.79, 29.10, 27.32, 64.04, 59.82, 91.09, 83.81, 104.35, 98.03,
    109.69, 102.97, 112.80, 105.70, 29.42, 27.39, 64.45, 59.60, 90.39, 83.23,
    105.55, 98.35, 110.88, 103.18, 113.84, 105.66, 28.68, 26.45, 62.46, 57.43,
    87.19, 80.98, 103.00, 95.06, 108.07, 99.64, 110.69, 101.90, 29.40, 27.08,
    63.96, 58.80, 89.35, 83.15, 105.59, 97.31, 110.76, 102.00, 113.40, 104.32,
    29.20, 26.86, 63.40, 58.56, 89.52, 84.05, 104.94, 96.51, 110.00, 101.20,
    112.49, 103.62, 9.18, 8.45, 19.96, 18.35, 27.93, 26.06, 32.99, 30.36,
    34.59, 31.82, 35.40, 32.55, 25.90, 23.81, 56.25, 51.77, 78.86, 73.72,
    93.04, 85.57, 97.56, 89.70, 99.81, 91.76, 26.56, 24.49, 57.73, 53.55,
    82.08, 77.20, 95.46, 87.97, 100.06, 92.29, 102.35, 94.60, 20.93, 19.48,
    45.71, 42.83, 65.86, 61.78, 75.16, 69.90, 78.84, 73.42, 80.80, 75.44,
    27.48, 25.63, 60.10, 56.39, 86.71, 81.23, 98.68, 91.95, 103.54, 96.61,
    106.15, 99.30, 27.99, 26.31, 61.56, 57.90, 88.75, 82.32, 100.42, 94.35,
    105.50, 99.18, 108.42, 101.99, 24.33, 22.86, 53.56, 50.06, 76.27, 70.20,
    87.26, 82.01, 91.72, 86.14, 94.33, 88.44, 28.64, 26.87, 63.01, 58.79,
    89.47, 82.29, 102.72, 96.44, 107.97, 101.28, 111.02, 103.94, 29.18, 27.14,
    63.89, 59.03, 89.50, 82.47, 104.72, 97.46, 109.99, 102.23, 112.90, 104.66,
    26.14, 24.09, 56.88, 52.29, 79.44, 73.87, 93.87, 86.55, 98.48, 90.73,
    100.84, 92.78, 29.27, 26.95, 63.65, 58.52, 88.98, 82.90, 105.14, 96.83,
    110.28, 101.50, 112.88, 103.80, 29.23, 26.90, 63.46, 58.67, 89.77, 84.33,
    105.03, 96.63, 110.09, 101.34, 112.59, 103.79, 26.51, 24.60, 57.80, 53.99,
    82.98, 77.99, 95.25, 88.28, 99.89, 92.70, 102.28, 95.18, 28.93, 26.89,
    63.15, 59.09, 90.86, 85.31, 103.93, 96.51, 109.01, 101.36, 111.67, 104.12,
    29.08, 27.28, 63.86, 60.07, 92.23, 85.85, 104.36, 97.85, 109.60, 102.85,
    112.55, 105.77, 27.25, 25.63, 60.01, 56.26, 85.89, 79.20, 97.75, 91.95,
    102.75, 96.62, 105.66, 99.27, 29.36, 27.60, 64.64, 60.50, 92.25, 84.97,
    105.30, 99.01, 110.68, 104.02, 113.82, 106.83, 29.80, 27.80, 65.37, 60.57,
    91.91, 84.56, 106.90, 99.83, 112.32, 104.75, 115.38, 107.32, 28.10, 25.96,
    61.27, 56.37, 85.53, 79.25, 100.90, 93.29, 105.90, 97.80, 108.52, 100.03,
    29.86, 27.54, 65.03, 59.80, 90.79, 84.29, 107.23, 98.98, 112.51, 103.76,
    115.25, 106.11, 29.77, 27.37, 64.64, 59.60, 90.99, 85.30, 106.99, 98.36,
    112.15, 103.12, 114.70, 105.55, 27.91, 25.81, 60.74, 56.54, 86.82, 81.67,
    100.30, 92.66, 105.15, 97.26, 107.60, 99.78, 29.38, 27.21, 64.00, 59.69,
    91.71, 86.24, 105.56, 97.69, 110.68, 102.56, 113.30, 105.27, 29.37, 27.48,
    64.37, 60.51, 93.00, 86.85, 105.43, 98.58, 110.67, 103.60, 113.56, 106.52,
    28.14, 26.47, 61.95, 58.20, 89.03, 82.32, 100.95, 94.96, 106.09, 99.80,
    109.07, 102.59, 29.54, 27.79, 65.04, 61.03, 93.26, 86.09, 105.96, 99.68,
    111.36, 104.75, 114.51, 107.65, 29.95, 28.03, 65.81, 61.19, 92.96, 85.47,
    107.43, 100.62, 112.90, 105.63, 116.04, 108.31, 28.87, 26.75, 63.06, 58.11,
    88.12, 81.40, 103.61, 96.10, 108.79, 100.77, 111.57, 103.10, 30.10, 27.84,
    65.68, 60.46, 91.70, 84.86, 108.06, 100.04, 113.43, 104.88, 116.28, 107.29,
    30.05, 27.63, 65.27, 60.07, 91.51, 85.55, 107.97, 99.30, 113.21, 104.09,
    115.82, 106.48, 28.61, 26.38, 62.16, 57.66, 88.40, 83.14, 102.80, 94.73,
    107.75, 99.39, 110.22, 101.88, 29.65, 27.38, 64.47, 59.92, 91.95, 86.50,
    106.53, 98.31, 111.67, 103.16, 114.26, 105.80, 29.52, 27.54, 64.58, 60.58,
    93.17, 87.27, 106.02, 98.80, 111.24, 103.80, 114.05, 106.69, 28.55, 26.84,
    62.79, 59.06, 90.53, 83.97, 102.44, 96.25, 107.62, 101.17, 110.59, 104.03,
    29.59, 27.83, 65.12, 61.22, 93.73, 86.78, 106.17, 99.83, 111.55, 104.92,
    114.67, 107.88, 29.97, 28.12, 65.93, 61.52, 93.62, 86.10, 107.48, 100.91,
    112.98, 105.98, 116.17, 108.75, 29.24, 27.19, 64.02, 59.14, 89.68, 82.64,
    104.93, 97.66, 110.22, 102.44, 113.13, 104.87, 30.21, 28.03, 66.05, 60.92,
    92.37, 85.23, 108.41, 100.69, 113.84, 105.60, 116.80, 108.07, 30.23, 27.82,
    65.72, 60.43, 91.88, 85.61, 108.57, 99.99, 113.88, 104.81, 116.56, 107.19,
    29.05, 26.74, 63.08, 58.32, 89.23, 83.83, 104.40, 96.05, 109.43, 100.73,
    111.91, 103.17, 29.85, 27.50, 64.84, 60.06, 92.00, 86.50, 107.28, 98.78,
    112.45, 103.62, 115.01, 106.17, 29.65, 27.56, 64.71, 60.55, 93.11, 87.42,
    106.50, 98.90, 111.70, 103.87, 114.43, 106.69, 28.79, 27.01, 63.22, 59.47,
    91.31, 84.99, 103.32, 96.88, 108.50, 101.83, 111.43, 104.72, 29.61, 27.81,
    65.09, 61.23, 93.92, 87.25, 106.25, 99.76, 111.61, 104.86, 114.66, 107.83,
    29.93, 28.14, 65.90, 61.68, 94.05, 86.62, 107.36, 100.94, 112.84, 106.05,
    116.05, 108.91, 29.44, 27.46, 64.57, 59.83, 90.79, 83.52, 105.60, 98.61,
    110.95, 103.48, 113.97, 106.01, 30.24, 28.15, 66.25, 61.28, 92.94, 85.57,
    108.48, 101.11, 113.96, 106.08, 117.02, 108.63, 30.34, 27.98, 66.07, 60.75,
    92.23, 85.64, 108.94, 100.56, 114.31, 105.41, 117.09, 107.80, 9.17, 8.43,
    19.91, 18.34, 27.98, 26.21, 32.95, 30.29, 34.54, 31.75, 35.33, 32.49,
    25.85, 23.77, 56.12, 51.77, 79.07, 74.17, 92.88, 85.40, 97.37, 89.54,
    99.58, 91.66, 26.51, 24.53, 57.71, 53.76, 82.57, 77.66, 95.26, 88.06,
    99.87, 92.43, 102.21, 94.85, 20.95, 19.58, 45.88, 43.10, 66.26, 61.95,
    75.21, 70.24, 78.93, 73.81, 80.97, 75.88, 27.53, 25.77, 60.36, 56.75,
    87.21, 81.39, 98.81, 92.45, 103.73, 97.16, 106.47, 99.91, 28.14, 26.47,
    61.95, 58.18, 88.96, 82.21, 100.94, 94.95, 106.08, 99.79, 109.07, 102.57,
    24.49, 22.94, 53.83, 50.12, 76.18, 70.04, 87.82, 82.33, 92.30, 86.45,
    94.89, 88.67, 28.82, 26.95, 63.30, 58.81, 89.32, 82.12, 103.36, 96.75,
    108.63, 101.56, 111.64, 104.12, 29.28, 27.11, 63.93, 58.89, 89.31, 82.55,
    105.10, 97.41, 110.34, 102.14, 113.15, 104.50, 26.12, 24.03, 56.76, 52.21,
    79.48, 74.22, 93.85, 86.35, 98.41, 90.51, 100.70, 92.58, 29.24, 26.88,
    63.50, 58.46, 89.10, 83.35, 105.05, 96.60, 110.15, 101.27, 112.68, 103.60,
    29.16, 26.90, 63.38, 58.83, 90.22, 84.87, 104.78, 96.60, 109.83, 101.36,
    112.35, 103.92, 26.51, 24.69, 57.94, 54.31, 83.52, 78.31, 95.20, 88.61,
    99.87, 93.08, 102.37, 95.65, 28.95, 27.02, 63.35, 59.46, 91.43, 85.59,
    103.94, 96.93, 109.07, 101.85, 111.85, 104.70, 29.21, 27.46, 64.25, 60.42,
    92.57, 85.81, 104.78, 98.48, 110.09, 103.52, 113.15, 106.44, 27.43, 25.76,
    60.37, 56.39, 85.87, 79.01, 98.38, 92.42, 103.41, 97.08, 106.34, 99.65,
    29.55, 27.71, 64.99, 60.60, 92.18, 84.76, 105.97, 99.45, 111.39, 104.43,
    114.53, 107.15, 29.93, 27.81, 65.50, 60.47, 91.69, 84.53, 107.41, 99.89,
    112.81, 104.77, 115.78, 107.25, 28.12, 25.90, 61.18, 56.25, 85.47, 79.54,
    101.01, 93.09, 105.96, 97.58, 108.48, 99.79, 29.86, 27.48, 64.91, 59.69,
    90.79, 84.66, 107.27, 98.75, 112.50, 103.51, 115.14, 105.86, 29.70, 27.35,
    64.51, 59.68, 91.35, 85.85, 106.75, 98.24, 111.89, 103.03, 114.43, 105.54,
    27.88, 25.88, 60.80, 56.83, 87.37, 82.08, 100.15, 92.89, 105.03, 97.54,
    107.56, 100.17, 29.36, 27.31, 64.11, 60.03, 92.31, 86.63, 105.45, 98.00,
    110.61, 102.94, 113.33, 105.75, 29.46, 27.65, 64.72, 60.88, 93.45, 86.91,
    105.72, 99.18, 111.03, 104.25, 114.04, 107.21, 28.31, 26.62, 62.35, 58.41,
    89.13, 82.15, 101.55, 95.52, 106.74, 100.36, 109.77, 103.10, 29.73, 27.93,
    65.44, 61.21, 93.29, 85.89, 106.62, 100.22, 112.07, 105.29, 115.25, 108.11,
    30.11, 28.07, 66.03, 61.14, 92.76, 85.36, 108.04, 100.81, 113.51, 105.78,
    116.58, 108.35, 28.92, 26.70, 63.03, 57.97, 87.98, 81.59, 103.86, 95.96,
    108.99, 100.59, 111.67, 102.88, 30.14, 27.79, 65.61, 60.32, 91.61, 85.12,
    108.23, 99.85, 113.55, 104.66, 116.29, 107.04, 29.99, 27.58, 65.12, 60.08,
    91.76, 86.07, 107.79, 99.10, 112.99, 103.91, 115.55, 106.36, 28.55, 26.41,
    62.15, 57.89, 88.92, 83.63, 102.58, 94.83, 107.54, 99.54, 110.07, 102.14,
    29.60, 27.44, 64.50, 60.20, 92.52, 86.98, 106.34, 98.48, 111.50, 103.40,
    114.16, 106.15, 29.57, 27.69, 64.86, 60.98, 93.70, 87.45, 106.17, 99.33,
    111.45, 104.39, 114.39, 107.35, 28.70, 27.00, 63.20, 59.34, 90.74, 83.85,
    102.97, 96.86, 108.21, 101.80, 111.26, 104.63, 29.77, 28.00, 65.54, 61.47,
    93.88, 86.62, 106.76, 100.44, 112.21, 105.54, 115.39, 108.45, 30.15, 28.20,
    66.23, 61.54, 93.46, 85.93, 108.16, 101.24, 113.66, 106.27, 116.81, 108.94,
    29.34, 27.17, 64.06, 59.01, 89.48, 82.72, 105.31, 97.60, 110.56, 102.34,
    113.37, 104.70, 30.28, 27.99, 66.05, 60.78, 92.20, 85.38, 108.72, 100.58,
    114.11, 105.45, 116.96, 107.86, 30.19, 27.76, 65.57, 60.37, 92.01, 86.07,
    108.48, 99.76, 113.74, 104.57, 116.35, 106.99, 28.98, 26.74, 63.00, 58.48,
    89.69, 84.37, 104.15, 96.02, 109.17, 100.75, 111.68, 103.29, 29.79, 27.52,
    64.80, 60.27, 92.52, 87.04, 107.03, 98.83, 112.20, 103.72, 114.81, 106.39,
    29.66, 27.69, 64.91, 60.93, 93.69, 87.71, 106.51, 99.33, 111.77, 104.37,
    114.61, 107.29, 28.91, 27.18, 63.61, 59.81, 91.65, 84.95, 103.74, 97.50,
    108.99, 102.48, 112.02, 105.38, 29.76, 27.99, 65.50, 61.55, 94.20, 87.16,
    106.75, 100.40, 112.18, 105.52, 115.33, 108.49, 30.13, 28.25, 66.27, 61.78,
    93.98, 86.42, 108.05, 101.39, 113.57, 106.48, 116.77, 109.25, 29.57, 27.47,
    64.70, 59.73, 90.57, 83.50, 106.11, 98.67, 111.44, 103.49, 114.37, 105.94,
    30.35, 28.14, 66.33, 61.15, 92.73, 85.61, 108.93, 101.10, 114.38, 106.02,
    117.33, 108.49, 30.34, 27.92, 65.94, 60.64, 92.24, 86.01, 108.98, 100.32,
    114.29, 105.16, 116.97, 107.55, 8.89, 8.18, 19.30, 17.83, 27.27, 25.62,
    31.94, 29.38, 33.47, 30.81, 34.23, 31.55, 25.05, 23.07, 54.40, 50.37,
    77.13, 72.51, 90.01, 82.86, 94.35, 86.92, 96.50, 89.05, 25.72, 23.90,
    56.13, 52.50, 80.71, 75.80, 92.40, 85.76, 96.91, 90.07, 99.27, 92.51,
    20.40, 19.13, 44.79, 42.13, 64.70, 60.25, 73.22, 68.63, 76.88, 72.13,
    78.95, 74.18, 26.83, 25.19, 58.96, 55.47, 85.10, 79.09, 96.27, 90.36,
    101.12, 94.98, 103.88, 97.67, 27.50, 25.86, 60.56, 56.70, 86.48, 79.67,
    98.64, 92.76, 103.68, 97.46, 106.63, 100.10, 23.92, 22.33, 52.49, 48.66,
    73.84, 67.92, 85.81, 80.17, 90.17, 84.13, 92.63, 86.20, 28.14, 26.21,
    61.67, 57.07, 86.56, 79.68, 100.95, 94.14, 106.06, 98.77, 108.91, 101.16,
    28.49, 26.29, 62.06, 57.07, 86.63, 80.40, 102.30, 94.46, 107.35, 99.02,
    109.97, 101.27, 25.33, 23.29, 55.00, 50.70, 77.38, 72.52, 91.03, 83.69,
    95.43, 87.74, 97.60, 89.80, 28.34, 26.07, 61.54, 56.80, 86.80, 81.46,
    101.86, 93.66, 106.77, 98.21, 109.19, 100.54, 28.27, 26.17, 61.56, 57.39,
    88.17, 82.91, 101.57, 93.96, 106.49, 98.64, 109.00, 101.23, 25.78, 24.11,
    56.50, 53.09, 81.61, 76.25, 92.56, 86.50, 97.15, 90.91, 99.68, 93.47,
    28.17, 26.40, 61.81, 58.13, 89.30, 83.28, 101.13, 94.68, 106.18, 99.51,
    109.00, 102.33, 28.53, 26.84, 62.81, 58.95, 90.11, 83.22, 102.32, 96.26,
    107.54, 101.16, 110.58, 103.97, 26.81, 25.10, 58.93, 54.82, 83.30, 76.58,
    96.17, 90.10, 101.07, 94.60, 103.89, 97.01, 28.87, 26.99, 63.40, 58.86,
    89.37, 82.18, 103.57, 96.89, 108.84, 101.69, 111.84, 104.23, 29.16, 26.98,
    63.65, 58.61, 88.88, 82.21, 104.69, 96.95, 109.89, 101.65, 112.67, 103.99,
    27.30, 25.10, 59.30, 54.56, 83.10, 77.65, 98.07, 90.21, 102.83, 94.56,
    105.21, 96.73, 28.97, 26.63, 62.90, 57.93, 88.33, 82.69, 104.08, 95.70,
    109.12, 100.32, 111.62, 102.65, 28.79, 26.57, 62.59, 58.15, 89.20, 83.92,
    103.44, 95.42, 108.43, 100.13, 110.93, 102.68, 27.08, 25.25, 59.21, 55.54,
    85.41, 80.03, 97.25, 90.58, 102.03, 95.16, 104.60, 97.81, 28.54, 26.66,
    62.48, 58.67, 90.21, 84.40, 102.47, 95.63, 107.54, 100.49, 110.30, 103.31,
    28.75, 27.03, 63.25, 59.47, 91.08, 84.36, 103.13, 96.96, 108.36, 101.91,
    111.38, 104.78, 27.68, 25.98, 60.91, 56.85, 86.54, 79.60, 99.28, 93.23,
    104.35, 97.92, 107.30, 100.49, 29.06, 27.24, 63.90, 59.54, 90.53, 83.24,
    104.23, 97.76, 109.55, 102.65, 112.63, 105.31, 29.37, 27.27, 64.25, 59.28,
    89.89, 82.91, 105.42, 97.96, 110.71, 102.74, 113.60, 105.15, 28.11, 25.88,
    61.12, 56.20, 85.43, 79.56, 100.95, 93.00, 105.89, 97.48, 108.40, 99.69,
    29.27, 26.92, 63.60, 58.49, 89.01, 83.06, 105.14, 96.76, 110.26, 101.42,
    112.83, 103.73, 29.07, 26.77, 63.13, 58.45, 89.51, 84.15, 104.46, 96.16,
    109.49, 100.86, 111.98, 103.34, 27.70, 25.74, 60.44, 56.53, 86.92, 81.63,
    99.50, 92.36, 104.36, 97.00, 106.90, 99.63, 28.74, 26.75, 62.78, 58.82,
    90.45, 84.84, 103.21, 95.99, 108.27, 100.83, 110.95, 103.60, 28.82, 27.07,
    63.35, 59.59, 91.43, 84.98, 103.44, 97.09, 108.64, 102.05, 111.61, 104.95,
    28.06, 26.38, 61.77, 57.84, 88.21, 81.27, 100.62, 94.62, 105.76, 99.42,
    108.77, 102.11, 29.10, 27.33, 64.05, 59.87, 91.20, 83.94, 104.36, 98.07,
    109.70, 103.02, 112.81, 105.77, 29.44, 27.43, 64.53, 59.71, 90.57, 83.37,
    105.64, 98.50, 110.98, 103.34, 113.96, 105.84, 28.55, 26.34, 62.18, 57.18,
    86.80, 80.56, 102.51, 94.65, 107.56, 99.22, 110.18, 101.47, 29.44, 27.13,
    64.07, 58.91, 89.49, 83.22, 105.74, 97.50, 110.93, 102.20, 113.59, 104.52,
    29.27, 26.92, 63.54, 58.66, 89.64, 84.12, 105.18, 96.72, 110.25, 101.41,
    112.75, 103.83, 28.10, 26.02, 61.19, 57.05, 87.64, 82.42, 100.96, 93.40,
    105.85, 98.05, 108.35, 100.62, 28.89, 26.80, 62.98, 58.83, 90.43, 84.99,
    103.79, 96.20, 108.84, 101.01, 111.45, 103.71, 28.87, 27.05, 63.34, 59.56,
    91.51, 85.34, 103.63, 97.03, 108.80, 101.97, 111.69, 104.87, 28.24, 26.57,
    62.18, 58.36, 89.21, 82.38, 101.30, 95.30, 106.46, 100.15, 109.48, 102.93,
    29.08, 27.35, 64.03, 60.02, 91.62, 84.49, 104.30, 98.11, 109.62, 103.09,
    112.73, 105.91, 29.44, 27.51, 64.64, 60.01, 91.12, 83.78, 105.60, 98.78,
    110.97, 103.68, 114.03, 106.27, 28.81, 26.65, 62.87, 57.89, 87.79, 81.21,
    103.41, 95.77, 108.55, 100.41, 111.29, 102.72, 29.55, 27.29, 64.41, 59.26,
    89.91, 83.33, 106.09, 98.08, 111.34, 102.82, 114.09, 105.16, 29.43, 27.06,
    63.90, 58.86, 89.74, 84.01, 105.74, 97.22, 110.86, 101.92, 113.40, 104.29,
    9.22, 8.50, 20.07, 18.45, 28.02, 26.03, 33.10, 30.54, 34.73, 32.01,
    35.57, 32.74, 26.01, 23.95, 56.57, 52.01, 79.06, 73.61, 93.42, 86.08,
    98.00, 90.22, 100.32, 92.27, 26.72, 24.58, 58.01, 53.61, 81.98, 76.99,
    96.02, 88.32, 100.65, 92.62, 102.93, 94.85, 21.01, 19.48, 45.78, 42.74,
    65.68, 61.74, 75.48, 69.91, 79.15, 73.40, 81.04, 75.35, 27.57, 25.61,
    60.15, 56.25, 86.48, 81.23, 99.04, 91.90, 103.87, 96.52, 106.39, 99.13,
    27.98, 26.23, 61.41, 57.77, 88.71, 82.63, 100.41, 94.10, 105.43, 98.90,
    108.26, 101.71, 24.26, 22.82, 53.43, 50.11, 76.53, 70.61, 87.03, 81.87,
    91.47, 86.04, 94.07, 88.40, 28.56, 26.85, 62.89, 58.89, 89.84, 82.78,
    102.43, 96.33, 107.67, 101.21, 110.73, 103.96, 29.15, 27.22, 63.97, 59.32,
    90.03, 82.81, 104.58, 97.72, 109.89, 102.55, 112.89, 105.08, 26.20, 24.22,
    57.15, 52.59, 79.78, 73.88, 94.08, 87.03, 98.74, 91.24, 101.21, 93.33,
    29.37, 27.10, 63.98, 58.84, 89.31, 82.86, 105.45, 97.39, 110.66, 102.09,
    113.36, 104.41, 29.39, 27.02, 63.82, 58.82, 89.76, 84.10, 105.62, 97.10,
    110.73, 101.80, 113.25, 104.18, 26.65, 24.62, 57.97, 53.92, 82.77, 77.86,
    95.75, 88.41, 100.37, 92.78, 102.71, 95.17, 29.06, 26.90, 63.28, 58.98,
    90.61, 85.21, 104.42, 96.58, 109.48, 101.39, 112.06, 104.05, 29.10, 27.22,
    63.76, 59.91, 92.10, 86.07, 104.48, 97.63, 109.66, 102.59, 112.51, 105.48,
    27.19, 25.58, 59.85, 56.24, 86.07, 79.64, 97.54, 91.74, 102.50, 96.42,
    105.38, 99.13, 29.28, 27.55, 64.47, 60.52, 92.52, 85.45, 105.03, 98.81,
    110.38, 103.84, 113.50, 106.73, 29.74, 27.85, 65.37, 60.82, 92.43, 84.98,
    106.67, 99.96, 112.11, 104.95, 115.24, 107.63, 28.14, 26.09, 61.50, 56.70,
    85.97, 79.37, 101.00, 93.74, 106.05, 98.30, 108.79, 100.59, 29.92, 27.69,
    65.32, 60.15, 91.22, 84.36, 107.41, 99.50, 112.76, 104.33, 115.61, 106.73,
    29.93, 27.52, 65.02, 59.82, 91.10, 85.11, 107.53, 98.91, 112.75, 103.68,
    115.36, 106.06, 28.07, 25.87, 60.99, 56.53, 86.63, 81.47, 100.87, 92.92,
    105.74, 97.48, 108.15, 99.91, 29.54, 27.26, 64.21, 59.64, 91.49, 86.07,
    106.14, 97.89, 111.26, 102.72, 113.82, 105.32, 29.43, 27.43, 64.34, 60.34,
    92.79, 86.96, 105.69, 98.42, 110.88, 103.40, 113.67, 106.26, 28.10, 26.40,
    61.78, 58.12, 89.11, 82.72, 100.82, 94.70, 105.91, 99.54, 108.83, 102.36,
    29.48, 27.72, 64.86, 60.98, 93.41, 86.54, 105.76, 99.42, 111.12, 104.50,
    114.22, 107.45, 29.87, 28.04, 65.74, 61.37, 93.43, 85.95, 107.14, 100.62,
    112.61, 105.69, 115.80, 108.47, 28.87, 26.86, 63.22, 58.44, 88.62, 81.63,
    103.58, 96.47, 108.81, 101.20, 111.70, 103.62, 30.12, 27.97, 65.89, 60.81,
    92.21, 85.04, 108.11, 100.48, 113.53, 105.38, 116.50, 107.86, 30.18, 27.79,
    65.65, 60.36, 91.74, 85.42, 108.41, 99.88, 113.72, 104.70, 116.42, 107.07,
    28.77, 26.47, 62.47, 57.73, 88.28, 82.91, 103.40, 95.11, 108.39, 99.74,
    110.84, 102.14, 29.82, 27.46, 64.76, 59.95, 91.78, 86.28, 107.15, 98.63,
    112.32, 103.45, 114.87, 105.99, 29.62, 27.51, 64.63, 60.43, 92.92, 87.27,
    106.41, 98.74, 111.60, 103.70, 114.30, 106.50, 28.54, 26.76, 62.65, 58.93,
    90.50, 84.29, 102.42, 95.99, 107.55, 100.89, 110.43, 103.75, 29.56, 27.76,
    64.96, 61.11, 93.76, 87.16, 106.08, 99.55, 111.41, 104.64, 114.45, 107.61,
    29.88, 28.10, 65.80, 61.62, 94.00, 86.61, 107.18, 100.80, 112.66, 105.91,
    115.86, 108.78, 29.21, 27.27, 64.10, 59.44, 90.21, 82.97, 104.79, 97.91,
    110.11, 102.76, 113.12, 105.29, 30.19, 28.13, 66.18, 61.26, 92.92, 85.52,
    108.33, 101.03, 113.80, 106.00, 116.87, 108.57, 30.33, 27.99, 66.07, 60.76,
    92.22, 85.57, 108.90, 100.57, 114.27, 105.42, 117.06, 107.82, 29.22, 26.86,
    63.43, 58.47, 89.22, 83.60, 104.99, 96.52, 110.06, 101.19, 112.57, 103.56,
    30.03, 27.61, 65.19, 60.17, 91.93, 86.26, 107.90, 99.22, 113.11, 104.03,
    115.67, 106.50, 29.78, 27.57, 64.85, 60.44, 92.85, 87.32, 107.00, 98.97,
    112.18, 103.89, 114.83, 106.62, 28.81, 26.94, 63.12, 59.32, 91.18, 85.21,
    103.43, 96.65, 108.56, 101.57, 111.38, 104.43, 29.61, 27.74, 64.96, 61.08,
    93.85, 87.54, 106.29, 99.50, 111.59, 104.57, 114.55, 107.53, 29.85, 28.09,
    65.73, 61.71, 94.33, 87.12, 107.09, 100.74, 112.55, 105.88, 115.73, 108.82,
    29.38, 27.51, 64.57, 60.08, 91.30, 83.94, 105.37, 98.74, 110.74, 103.67,
    113.84, 106.31, 30.19, 28.22, 66.30, 61.57, 93.48, 85.95, 108.29, 101.32,
    113.80, 106.35, 116.95, 109.01, 30.40, 28.14, 66.36, 61.11, 92.67, 85.71,
    109.13, 101.09, 114.56, 105.99, 117.46, 108.43, 9.21, 8.48, 20.02, 18.41,
    28.02, 26.15, 33.10, 30.46, 34.71, 31.93, 35.52, 32.66, 25.98, 23.89,
    56.44, 51.94, 79.13, 73.98, 93.35, 85.86, 97.88, 90.00, 100.14, 92.07,
    26.65, 24.58, 57.92, 53.73, 82.37, 77.47, 95.78, 88.27, 100.40, 92.61,
    102.69, 94.93, 21.00, 19.55, 45.87, 42.98, 66.09, 62.00, 75.41, 70.14,
    79.11, 73.68, 81.07, 75.70, 27.57, 25.72, 60.31, 56.58, 87.02, 81.51,
    99.01, 92.27, 103.89, 96.94, 106.51, 99.64, 28.09, 26.40, 61.77, 58.10,
    89.05, 82.60, 100.77, 94.68, 105.87, 99.52, 108.79, 102.34, 24.42, 22.93,
    53.74, 50.23, 76.53, 70.43, 87.57, 82.29, 92.04, 86.44, 94.66, 88.75,
    28.74, 26.97, 63.23, 58.99, 89.77, 82.57, 103.08, 96.77, 108.35, 101.63,
    111.41, 104.29, 29.28, 27.23, 64.11, 59.22, 89.80, 82.75, 105.08, 97.79,
    110.37, 102.58, 113.29, 105.02, 26.23, 24.17, 57.07, 52.47, 79.71, 74.12,
    94.19, 86.84, 98.81, 91.03, 101.18, 93.09, 29.37, 27.03, 63.86, 58.71,
    89.28, 83.19, 105.50, 97.16, 110.65, 101.84, 113.26, 104.15, 29.32, 26.99,
    63.67, 58.87, 90.08, 84.63, 105.38, 96.95, 110.46, 101.68, 112.96, 104.14,
    26.60, 24.68, 58.00, 54.18, 83.28, 78.26, 95.57, 88.58, 100.22, 93.01,
    102.63, 95.50, 29.03, 26.99, 63.37, 59.30, 91.18, 85.60, 104.28, 96.84,
    109.38, 101.71, 112.05, 104.48, 29.18, 27.38, 64.08, 60.28, 92.55, 86.14,
    104.72, 98.20, 109.98, 103.21, 112.94, 106.14, 27.35, 25.72, 60.22, 56.45,
    86.18, 79.47, 98.10, 92.28, 103.10, 96.96, 106.03, 99.62, 29.46, 27.69,
    64.86, 60.71, 92.56, 85.25, 105.66, 99.35, 111.06, 104.38, 114.22, 107.19,
    29.90, 27.90, 65.59, 60.78, 92.22, 84.84, 107.27, 100.17, 112.71, 105.11,
    115.78, 107.69, 28.20, 26.05, 61.48, 56.56, 85.81, 79.52, 101.25, 93.60,
    106.26, 98.13, 108.89, 100.36, 29.96, 27.64, 65.25, 60.00, 91.09, 84.58,
    107.60, 99.31, 112.90, 104.10, 115.64, 106.47, 29.87, 27.47, 64.85, 59.80,
    91.30, 85.60, 107.34, 98.69, 112.53, 103.47, 115.09, 105.90, 28.01, 25.90,
    60.95, 56.74, 87.12, 81.95, 100.63, 92.98, 105.50, 97.59, 107.97, 100.12,
    29.48, 27.31, 64.21, 59.90, 92.03, 86.54, 105.91, 98.03, 111.05, 102.91,
    113.68, 105.63, 29.47, 27.58, 64.60, 60.72, 93.32, 87.15, 105.79, 98.92,
    111.05, 103.96, 113.96, 106.89, 28.24, 26.57, 62.17, 58.40, 89.34, 82.60,
    101.30, 95.29, 106.46, 100.15, 109.45, 102.95, 29.64, 27.89, 65.27, 61.24,
    93.58, 86.38, 106.32, 100.03, 111.75, 105.12, 114.91, 108.02, 30.05, 28.13,
    66.04, 61.40, 93.28, 85.75, 107.80, 100.96, 113.29, 105.99, 116.45, 108.67,
    28.97, 26.84, 63.27, 58.31, 88.41, 81.68, 103.97, 96.42, 109.16, 101.11,
    111.95, 103.45, 30.20, 27.94, 65.90, 60.66, 92.01, 85.15, 108.43, 100.37,
    113.82, 105.23, 116.68, 107.65, 30.15, 27.72, 65.49, 60.27, 91.83, 85.85,
    108.33, 99.63, 113.59, 104.44, 116.20, 106.84, 28.70, 26.47, 62.37, 57.86,
    88.70, 83.43, 103.14, 95.05, 108.11, 99.72, 110.59, 102.22, 29.74, 27.47,
    64.69, 60.13, 92.27, 86.80, 106.89, 98.64, 112.05, 103.51, 114.64, 106.16,
    29.62, 27.63, 64.80, 60.80, 93.49, 87.57, 106.38, 99.14, 111.62, 104.16,
    114.44, 107.06, 28.65, 26.93, 63.01, 59.26, 90.84, 84.26, 102.80, 96.59,
    107.99, 101.52, 110.98, 104.40, 29.70, 27.93, 65.35, 61.43, 94.05, 87.07,
    106.53, 100.17, 111.94, 105.29, 115.07, 108.25, 30.07, 28.22, 66.16, 61.73,
    93.93, 86.39, 107.86, 101.26, 113.37, 106.34, 116.57, 109.13, 29.34, 27.28,
    64.24, 59.34, 89.98, 82.92, 105.30, 97.99, 110.60, 102.78, 113.52, 105.22,
    30.31, 28.12, 66.27, 61.13, 92.68, 85.52, 108.78, 101.03, 114.23, 105.95,
    117.20, 108.43, 30.33, 27.92, 65.94, 60.63, 92.19, 85.91, 108.94, 100.33,
    114.26, 105.16, 116.95, 107.55, 29.15, 26.83, 63.29, 58.52, 89.54, 84.13,
    104.74, 96.37, 109.79, 101.07, 112.28, 103.52, 29.95, 27.59, 65.06, 60.27,
    92.32, 86.81, 107.63, 99.11, 112.82, 103.97, 115.39, 106.53, 29.75, 27.65,
    64.93, 60.76, 93.43, 87.72, 106.85, 99.24, 112.08, 104.23, 114.82, 107.06,
    28.89, 27.10, 63.44, 59.68, 91.62, 85.28, 103.67, 97.21, 108.87, 102.18,
    111.81, 105.08, 29.71, 27.91, 65.32, 61.44, 94.25, 87.54, 106.62, 100.11,
    111.99, 105.22, 115.06, 108.21, 30.04, 28.23, 66.13, 61.89, 94.37, 86.91,
    107.73, 101.29, 113.24, 106.42, 116.46, 109.29, 29.54, 27.55, 64.79, 60.04,
    91.09, 83.80, 105.97, 98.94, 111.34, 103.83, 114.37, 106.37, 30.34, 28.25,
    66.48, 61.48, 93.25, 85.86, 108.86, 101.45, 114.36, 106.43, 117.42, 108.99,
    30.44, 28.08, 66.29, 60.95, 92.54, 85.94, 109.31, 100.89, 114.70, 105.76,
    117.48, 108.16, 8.95, 8.23, 19.44, 17.91, 27.32, 25.59, 32.17, 29.57,
    33.72, 31.00, 34.49, 31.73, 25.24, 23.21, 54.79, 50.55, 77.21, 72.43,
    90.69, 83.38, 95.07, 87.43, 97.22, 89.49, 25.88, 23.95, 56.35, 52.50,
    80.63, 75.84, 93.00, 85.98, 97.51, 90.26, 99.80, 92.61, 20.45, 19.12,
    44.80, 42.09, 64.70, 60.49, 73.43, 68.59, 77.07, 72.07, 79.07, 74.10,
    26.88, 25.17, 58.94, 55.42, 85.16, 79.47, 96.48, 90.28, 101.29, 94.88,
    103.96, 97.56, 27.48, 25.85, 60.50, 56.81, 86.86, 80.26, 98.57, 92.72,
    103.59, 97.45, 106.51, 100.16, 23.91, 22.40, 52.56, 48.93, 74.38, 68.38,
    85.76, 80.39, 90.14, 84.41, 92.66, 86.58, 28.14, 26.32, 61.81, 57.43,
    87.21, 80.18, 100.93, 94.47, 106.07, 99.17, 109.01, 101.66, 28.59, 26.47,
    62.43, 57.50, 87.20, 80.61, 102.63, 95.11, 107.74, 99.73, 110.48, 102.03,
    25.51, 23.46, 55.42, 50.98, 77.61, 72.48, 91.63, 84.31, 96.09, 88.37,
    98.32, 90.39, 28.55, 26.25, 62.00, 57.08, 87.00, 81.39, 102.57, 94.32,
    107.54, 98.87, 110.01, 101.16, 28.47, 26.27, 61.88, 57.45, 88.10, 82.88,
    102.30, 94.32, 107.23, 98.97, 109.70, 101.47, 25.88, 24.11, 56.57, 53.03,
    81.56, 76.46, 92.95, 86.52, 97.52, 90.89, 99.96, 93.40, 28.26, 26.38,
    61.85, 58.06, 89.28, 83.58, 101.49, 94.66, 106.50, 99.46, 109.21, 102.24,
    28.52, 26.81, 62.74, 59.00, 90.39, 83.78, 102.32, 96.17, 107.50, 101.09,
    110.49, 103.94, 26.79, 25.15, 58.95, 55.06, 83.85, 77.14, 96.07, 90.25,
    100.98, 94.79, 103.84, 97.30, 28.85, 27.06, 63.47, 59.17, 90.00, 82.76,
    103.49, 97.11, 108.77, 101.98, 111.84, 104.63, 29.23, 27.15, 63.95, 59.04,
    89.52, 82.54, 104.89, 97.53, 110.16, 102.30, 113.05, 104.72, 27.46, 25.29,
    59.73, 54.92, 83.46, 77.67, 98.63, 90.89, 103.46, 95.27, 105.92, 97.43,
    29.16, 26.83, 63.38, 58.28, 88.65, 82.67, 104.73, 96.42, 109.84, 101.06,
    112.42, 103.36, 29.00, 26.70, 62.98, 58.28, 89.20, 83.84, 104.22, 95.92,
    109.24, 100.60, 111.73, 103.05, 27.22, 25.27, 59.37, 55.50, 85.32, 80.15,
    97.78, 90.70, 102.55, 95.25, 105.02, 97.81, 28.67, 26.67, 62.60, 58.62,
    90.14, 84.59, 102.96, 95.70, 108.00, 100.52, 110.66, 103.27, 28.77, 27.00,
    63.20, 59.45, 91.25, 84.86, 103.23, 96.85, 108.42, 101.80, 111.36, 104.69,
    27.65, 26.00, 60.88, 57.03, 87.03, 80.21, 99.17, 93.27, 104.23, 98.00,
    107.19, 100.67, 29.03, 27.28, 63.91, 59.77, 91.09, 83.86, 104.11, 97.87,
    109.43, 102.81, 112.54, 105.57, 29.41, 27.41, 64.47, 59.70, 90.57, 83.34,
    105.50, 98.43, 110.84, 103.28, 113.84, 105.80, 28.24, 26.07, 61.54, 56.60,
    85.90, 79.67, 101.41, 93.69, 106.42, 98.21, 109.03, 100.45, 29.43, 27.13,
    64.06, 58.90, 89.45, 83.12, 105.68, 97.49, 110.87, 102.19, 113.55, 104.51,
    29.29, 26.93, 63.58, 58.66, 89.60, 84.05, 105.24, 96.76, 110.32, 101.45,
    112.82, 103.85, 27.87, 25.79, 60.68, 56.53, 86.83, 81.67, 100.15, 92.60,
    105.00, 97.20, 107.47, 99.74, 28.90, 26.79, 62.98, 58.79, 90.35, 84.93,
    103.82, 96.16, 108.87, 100.97, 111.46, 103.65, 28.88, 27.04, 63.33, 59.54,
    91.50, 85.39, 103.66, 97.00, 108.83, 101.94, 111.70, 104.83, 28.03, 26.37,
    61.71, 57.95, 88.60, 81.87, 100.55, 94.59, 105.67, 99.41, 108.65, 102.18,
    29.07, 27.34, 64.00, 60.02, 91.67, 84.57, 104.26, 98.08, 109.58, 103.06,
    112.68, 105.90, 29.44, 27.54, 64.67, 60.09, 91.25, 83.90, 105.62, 98.85,
    110.99, 103.77, 114.07, 106.37, 28.65, 26.52, 62.55, 57.61, 87.37, 80.77,
    102.83, 95.30, 107.96, 99.92, 110.70, 102.23, 29.57, 27.33, 64.49, 59.34,
    90.02, 83.37, 106.16, 98.20, 111.43, 102.95, 114.20, 105.31, 29.48, 27.10,
    64.02, 58.94, 89.84, 84.05, 105.92, 97.40, 111.05, 102.10, 113.60, 104.46,
    28.30, 26.11, 61.51, 57.11, 87.58, 82.38, 101.68, 93.76, 106.59, 98.38,
    109.04, 100.86, 29.08, 26.88, 63.27, 58.85, 90.34, 84.99, 104.50, 96.50,
    109.55, 101.27, 112.10, 103.88, 28.96, 27.04, 63.38, 59.50, 91.49, 85.64,
    104.00, 97.00, 109.13, 101.92, 111.91, 104.76, 28.23, 26.55, 62.11, 58.41,
    89.49, 82.94, 101.30, 95.21, 106.43, 100.08, 109.38, 102.90, 29.06, 27.33,
    63.96, 60.10, 91.98, 85.10, 104.25, 98.04, 109.54, 103.05, 112.62, 105.94,
    29.42, 27.59, 64.71, 60.32, 91.76, 84.38, 105.51, 99.01, 110.90, 103.97,
    114.03, 106.67, 28.87, 26.82, 63.17, 58.32, 88.43, 81.53, 103.61, 96.34,
    108.82, 101.05, 111.67, 103.44, 29.64, 27.48, 64.77, 59.71, 90.53, 83.59,
    106.37, 98.71, 111.69, 103.52, 114.57, 105.93, 29.62, 27.26, 64.39, 59.21,
    90.06, 83.99, 106.40, 97.95, 111.59, 102.67, 114.21, 105.01, 9.24, 8.54,
    20.15, 18.55, 28.14, 26.04, 33.16, 30.70, 34.81, 32.18, 35.68, 32.92,
    26.08, 24.09, 56.85, 52.29, 79.35, 73.57, 93.66, 86.55, 98.29, 90.73,
    100.71, 92.79, 26.87, 24.70, 58.33, 53.74, 81.97, 76.77, 96.54, 88.76,
    101.21, 93.05, 103.52, 95.21, 21.11, 19.50, 45.92, 42.68, 65.50, 61.62,
    75.87, 70.02, 79.53, 73.48, 81.37, 75.35, 27.69, 25.62, 60.28, 56.14,
    86.22, 81.10, 99.50, 91.98, 104.32, 96.54, 106.76, 99.06, 28.00, 26.17,
    61.32, 57.60, 88.56, 82.81, 100.52, 93.87, 105.50, 98.64, 108.23, 101.41,
    24.21, 22.77, 53.27, 50.07, 76.66, 70.98, 86.84, 81.65, 91.25, 85.82,
    93.80, 88.24, 28.48, 26.79, 62.71, 58.89, 90.06, 83.23, 102.17, 96.11,
    107.37, 101.01, 110.40, 103.83, 29.08, 27.25, 63.94, 59.54, 90.51, 83.21,
    104.31, 97.80, 109.64, 102.69, 112.71, 105.33, 26.23, 24.33, 57.34, 52.89,
    80.19, 74.00, 94.13, 87.42, 98.84, 91.68, 101.41, 93.82, 29.41, 27.24,
    64.23, 59.17, 89.73, 82.93, 105.58, 97.87, 110.85, 102.62, 113.67, 104.99,
    29.54, 27.17, 64.18, 59.04, 89.87, 83.90, 106.12, 97.64, 111.28, 102.34,
    113.86, 104.68, 26.79, 24.68, 58.20, 53.91, 82.59, 77.65, 96.28, 88.66,
    100.92, 93.00, 103.22, 95.30, 29.21, 26.95, 63.50, 58.94, 90.37, 85.01,
    104.98, 96.78, 110.05, 101.55, 112.57, 104.10, 29.16, 27.16, 63.73, 59.74,
    91.87, 86.14, 104.74, 97.47, 109.88, 102.39, 112.62, 105.22, 27.15, 25.50,
    59.68, 56.14, 86.11, 79.99, 97.42, 91.47, 102.33, 96.14, 105.13, 98.87,
    29.22, 27.47, 64.28, 60.45, 92.63, 85.87, 104.84, 98.53, 110.14, 103.56,
    113.20, 106.49, 29.65, 27.85, 65.27, 60.97, 92.86, 85.45, 106.36, 99.92,
    111.79, 104.96, 114.96, 107.74, 28.13, 26.19, 61.63, 57.00, 86.45, 79.60,
    100.93, 94.06, 106.02, 98.68, 108.86, 101.05, 29.93, 27.81, 65.50, 60.48,
    91.71, 84.54, 107.41, 99.90, 112.81, 104.79, 115.78, 107.27, 30.05, 27.68,
    65.37, 60.10, 91.33, 84.98, 107.92, 99.47, 113.21, 104.27, 115.91, 106.63,
    28.23, 25.97, 61.29, 56.60, 86.52, 81.23, 101.45, 93.29, 106.34, 97.83,
    108.75, 100.17, 29.70, 27.34, 64.50, 59.67, 91.32, 85.82, 106.74, 98.22,
    111.88, 103.02, 114.42, 105.52, 29.53, 27.41, 64.40, 60.18, 92.52, 86.93,
    106.08, 98.37, 111.24, 103.30, 113.93, 106.08, 28.08, 26.33, 61.63, 57.97,
    89.04, 82.99, 100.81, 94.42, 105.85, 99.24, 108.67, 102.06, 29.45, 27.64,
    64.69, 60.85, 93.40, 86.89, 105.67, 99.13, 110.98, 104.19, 113.99, 107.15,
    29.78, 28.01, 65.58, 61.45, 93.77, 86.44, 106.82, 100.47, 112.28, 105.57,
    115.47, 108.45, 28.82, 26.93, 63.27, 58.71, 89.13, 81.96, 103.40, 96.68,
    108.66, 101.47, 111.64, 103.99, 30.10, 28.06, 66.00, 61.12, 92.73, 85.33,
    107.98, 100.77, 113.45, 105.74, 116.52, 108.32, 30.27, 27.95, 65.97, 60.68,
    92.08, 85.38, 108.69, 100.43, 114.06, 105.28, 116.87, 107.68, 28.93, 26.60,
    62.82, 57.87, 88.28, 82.68, 103.96, 95.58, 108.98, 100.20, 111.47, 102.53,
    29.99, 27.57, 65.10, 60.05, 91.71, 86.02, 107.75, 99.07, 112.95, 103.87,
    115.52, 106.33, 29.75, 27.53, 64.76, 60.32, 92.64, 87.14, 106.90, 98.82,
    112.08, 103.73, 114.71, 106.43, 28.56, 26.69, 62.55, 58.76, 90.33, 84.47,
    102.54, 95.75, 107.62, 100.62, 110.40, 103.45, 29.56, 27.68, 64.82, 60.94,
    93.65, 87.41, 106.12, 99.27, 111.40, 104.33, 114.33, 107.29, 29.80, 28.04,
    65.61, 61.62, 94.23, 87.08, 106.91, 100.57, 112.35, 105.69, 115.52, 108.64,
    29.14, 27.30, 64.07, 59.66, 90.69, 83.38, 104.53, 98.00, 109.86, 102.90,
    112.94, 105.54, 30.14, 28.19, 66.20, 61.52, 93.43, 85.90, 108.10, 101.19,
    113.60, 106.22, 116.75, 108.90, 30.37, 28.13, 66.33, 61.10, 92.66, 85.64,
    109.03, 101.06, 114.47, 105.97, 117.38, 108.42, 29.36, 27.01, 63.80, 58.68,
    89.33, 83.40, 105.48, 97.05, 110.61, 101.73, 113.18, 104.05, 30.19, 27.75,
    65.56, 60.35, 91.97, 86.03, 108.45, 99.73, 113.71, 104.55, 116.32, 106.96,
    29.93, 27.62, 65.07, 60.39, 92.61, 87.12, 107.57, 99.17, 112.76, 104.05,
    115.35, 106.68, 28.87, 26.89, 63.10, 59.14, 90.95, 85.28, 103.69, 96.49,
    108.78, 101.37, 111.49, 104.17, 29.65, 27.67, 64.88, 60.90, 93.64, 87.67,
    106.47, 99.29, 111.73, 104.32, 114.57, 107.23, 29.79, 28.01, 65.54, 61.63,
    94.44, 87.55, 106.89, 100.46, 112.30, 105.59, 115.42, 108.58, 29.29, 27.51,
    64.47, 60.23, 91.72, 84.40, 105.06, 98.70, 110.43, 103.68, 113.56, 106.43,
    30.11, 28.24, 66.24, 61.76, 93.96, 86.40, 108.00, 101.35, 113.52, 106.44,
    116.72, 109.21, 30.41, 28.26, 66.55, 61.45, 93.17, 85.89, 109.13, 101.50,
    114.61, 106.46, 117.63, 108.97, 9.25, 8.52, 20.13, 18.50, 28.10, 26.11,
    33.20, 30.63, 34.83, 32.11, 35.67, 32.83, 26.09, 24.02, 56.74, 52.17,
    79.30, 73.84, 93.71, 86.33, 98.29, 90.49, 100.62, 92.55, 26.80, 24.66,
    58.19, 53.77, 82.24, 77.24, 96.31, 88.59, 100.95, 92.90, 103.24, 95.14,
    21.07, 19.54, 45.93, 42.87, 65.89, 61.94, 75.71, 70.13, 79.39, 73.63,
    81.28, 75.59, 27.65, 25.69, 60.33, 56.42, 86.75, 81.48, 99.34, 92.19,
    104.18, 96.82, 106.71, 99.44, 28.06, 26.32, 61.61, 57.95, 88.99, 82.89,
    100.72, 94.39, 105.76, 99.21, 108.60, 102.03, 24.34, 22.90, 53.60, 50.27,
    76.77, 70.82, 87.31, 82.13, 91.76, 86.31, 94.36, 88.68, 28.65, 26.94,
    63.08, 59.07, 90.11, 83.02, 102.76, 96.64, 108.01, 101.53, 111.08, 104.29,
    29.24, 27.30, 64.17, 59.50, 90.30, 83.06, 104.91, 98.02, 110.23, 102.87,
    113.25, 105.40, 26.29, 24.29, 57.32, 52.75, 80.02, 74.11, 94.37, 87.29,
    99.05, 91.52, 101.52, 93.61, 29.46, 27.18, 64.17, 59.02, 89.58, 83.12,
    105.78, 97.68, 110.99, 102.40, 113.71, 104.73, 29.48, 27.11, 64.01, 59.00,
    90.03, 84.37, 105.94, 97.40, 111.06, 102.11, 113.59, 104.50, 26.73, 24.70,
    58.14, 54.09, 83.03, 78.11, 96.04, 88.68, 100.68, 93.07, 103.02, 95.47,
    29.15, 26.99, 63.48, 59.17, 90.89, 85.48, 104.74, 96.88, 109.81, 101.70,
    112.40, 104.37, 29.19, 27.30, 63.96, 60.10, 92.39, 86.34, 104.80, 97.93,
    110.00, 102.92, 112.86, 105.82, 27.28, 25.66, 60.04, 56.42, 86.34, 79.88,
    97.85, 92.03, 102.82, 96.73, 105.71, 99.44, 29.37, 27.63, 64.68, 60.71,
    92.80, 85.71, 105.36, 99.12, 110.73, 104.17, 113.86, 107.06, 29.83, 27.93,
    65.57, 61.01, 92.71, 85.23, 107.00, 100.27, 112.46, 105.27, 115.60, 107.96,
    28.23, 26.17, 61.69, 56.87, 86.23, 79.62, 101.31, 94.02, 106.38, 98.60,
    109.12, 100.89, 30.01, 27.78, 65.51, 60.33, 91.49, 84.62, 107.75, 99.80,
    113.11, 104.64, 115.97, 107.05, 30.02, 27.61, 65.21, 60.00, 91.38, 85.38,
    107.85, 99.21, 113.09, 103.99, 115.71, 106.38, 28.15, 25.95, 61.17, 56.71,
    86.90, 81.73, 101.18, 93.21, 106.05, 97.78, 108.47, 100.21, 29.62, 27.34,
    64.41, 59.83, 91.78, 86.34, 106.45, 98.19, 111.59, 103.03, 114.16, 105.65,
    29.52, 27.52, 64.54, 60.53, 93.08, 87.23, 106.01, 98.73, 111.22, 103.72,
    114.02, 106.60, 28.19, 26.49, 61.98, 58.30, 89.39, 82.97, 101.14, 95.00,
    106.24, 99.85, 109.17, 102.68, 29.57, 27.81, 65.07, 61.17, 93.70, 86.80,
    106.09, 99.74, 111.47, 104.83, 114.58, 107.79, 29.97, 28.13, 65.94, 61.56,
    93.71, 86.21, 107.48, 100.94, 112.97, 106.01, 116.17, 108.81, 28.96, 26.94,
    63.42, 58.62, 88.89, 81.88, 103.91, 96.76, 109.15, 101.50, 112.05, 103.93,
    30.22, 28.06, 66.10, 61.00, 92.48, 85.30, 108.44, 100.79, 113.89, 105.70,
    116.86, 108.19, 30.28, 27.88, 65.85, 60.54, 92.02, 85.69, 108.74, 100.18,
    114.06, 105.01, 116.77, 107.39, 28.86, 26.55, 62.66, 57.91, 88.56, 83.18,
    103.71, 95.40, 108.71, 100.04, 111.18, 102.45, 29.91, 27.54, 64.95, 60.13,
    92.07, 86.55, 107.47, 98.93, 112.65, 103.77, 115.21, 106.31, 29.71, 27.60,
    64.82, 60.63, 93.21, 87.55, 106.73, 99.05, 111.94, 104.02, 114.65, 106.84,
    28.63, 26.85, 62.85, 59.12, 90.78, 84.55, 102.74, 96.29, 107.88, 101.21,
    110.78, 104.08, 29.65, 27.84, 65.16, 61.30, 94.06, 87.43, 106.41, 99.86,
    111.76, 104.97, 114.81, 107.95, 29.98, 28.19, 66.01, 61.81, 94.28, 86.87,
    107.52, 101.12, 113.02, 106.24, 116.23, 109.12, 29.30, 27.35, 64.30, 59.62,
    90.48, 83.22, 105.12, 98.21, 110.46, 103.07, 113.47, 105.61, 30.29, 28.22,
    66.39, 61.44, 93.19, 85.78, 108.67, 101.34, 114.16, 106.32, 117.23, 108.90,
    30.42, 28.07, 66.27, 60.94, 92.50, 85.84, 109.23, 100.87, 114.62, 105.74,
    117.42, 108.14, 29.31, 26.94, 63.62, 58.64, 89.50, 83.87, 105.30, 96.81,
    110.39, 101.50, 112.91, 103.87, 30.12, 27.70, 65.38, 60.35, 92.21, 86.54,
    108.23, 99.52, 113.45, 104.35, 116.02, 106.83, 29.87, 27.65, 65.04, 60.63,
    93.14, 87.60, 107.32, 99.27, 112.52, 104.21, 115.17, 106.95, 28.90, 27.03,
    63.32, 59.50, 91.47, 85.47, 103.75, 96.95, 108.90, 101.89, 111.73, 104.76,
    29.70, 27.83, 65.16, 61.27, 94.14, 87.80, 106.62, 99.81, 111.94, 104.90,
    114.90, 107.87, 29.95, 28.17, 65.94, 61.90, 94.61, 87.38, 107.43, 101.06,
    112.90, 106.21, 116.09, 109.16, 29.47, 27.59, 64.77, 60.26, 91.58, 84.19,
    105.70, 99.05, 111.09, 103.99, 114.19, 106.64, 30.29, 28.31, 66.50, 61.75,
    93.76, 86.21, 108.64, 101.63, 114.16, 106.68, 117.31, 109.34, 30.49, 28.22,
    66.56, 61.29, 92.95, 85.97, 109.47, 101.39, 114.92, 106.31, 117.82, 108.75,
    9.01, 8.29, 19.58, 18.00, 27.40, 25.57, 32.36, 29.78, 33.94, 31.22,
    34.73, 31.93, 25.41, 23.36, 55.18, 50.79, 77.37, 72.34, 91.28, 83.95,
    95.70, 88.00, 97.91, 90.02, 26.06, 24.03, 56.63, 52.54, 80.54, 75.76,
    93.65, 86.31, 98.16, 90.55, 100.41, 92.82, 20.53, 19.11, 44.85, 42.03,
    64.63, 60.62, 73.74, 68.59, 77.35, 72.05, 79.27, 74.03, 26.96, 25.15,
    58.97, 55.33, 85.09, 79.70, 96.81, 90.23, 101.58, 94.80, 104.15, 97.44,
    27.46, 25.82, 60.41, 56.81, 87.08, 80.76, 98.54, 92.59, 103.52, 97.32,
    106.39, 100.08, 23.88, 22.43, 52.55, 49.12, 74.83, 68.86, 85.63, 80.47,
    90.01, 84.53, 92.56, 86.78, 28.10, 26.37, 61.83, 57.68, 87.77, 80.73,
    100.80, 94.63, 105.95, 99.38, 108.94, 101.98, 28.64, 26.62, 62.68, 57.90,
    87.80, 80.91, 102.76, 95.62, 107.93, 100.30, 110.78, 102.68, 25.64, 23.63,
    55.80, 51.30, 77.93, 72.48, 92.09, 84.91, 96.61, 89.00, 98.93, 91.02,
    28.72, 26.43, 62.44, 57.41, 87.29, 81.35, 103.15, 94.99, 108.19, 99.57,
    110.74, 101.83, 28.67, 26.39, 62.26, 57.57, 88.08, 82.76, 103.03, 94.79,
    108.00, 99.42, 110.45, 101.83, 26.01, 24.13, 56.71, 52.98, 81.43, 76.53,
    93.45, 86.62, 97.99, 90.95, 100.35, 93.39, 28.39, 26.39, 61.96, 57.98,
    89.16, 83.71, 101.96, 94.70, 106.95, 99.46, 109.56, 102.17, 28.53, 26.77,
    62.67, 58.95, 90.50, 84.23, 102.40, 96.02, 107.54, 100.93, 110.44, 103.80,
    26.75, 25.15, 58.89, 55.20, 84.26, 77.70, 95.93, 90.23, 100.82, 94.82,
    103.69, 97.41, 28.81, 27.08, 63.43, 59.36, 90.50, 83.35, 103.33, 97.15,
    108.61, 102.07, 111.69, 104.82, 29.24, 27.28, 64.14, 59.43, 90.17, 82.95,
    104.90, 97.94, 110.22, 102.78, 113.21, 105.29, 27.57, 25.47, 60.11, 55.30,
    83.90, 77.76, 99.00, 91.52, 103.90, 95.94, 106.47, 98.13, 29.30, 27.02,
    63.80, 58.66, 89.07, 82.71, 105.21, 97.10, 110.39, 101.79, 113.07, 104.10,
    29.21, 26.86, 63.41, 58.47, 89.28, 83.71, 104.95, 96.49, 110.02, 101.17,
    112.52, 103.55, 27.38, 25.32, 59.59, 55.48, 85.19, 80.14, 98.39, 90.92,
    103.15, 95.43, 105.56, 97.90, 28.82, 26.70, 62.79, 58.57, 90.00, 84.62,
    103.56, 95.85, 108.58, 100.63, 111.16, 103.29, 28.81, 26.97, 63.17, 59.37,
    91.25, 85.21, 103.44, 96.73, 108.59, 101.66, 111.43, 104.53, 27.62, 25.98,
    60.79, 57.10, 87.35, 80.76, 99.06, 93.18, 104.10, 97.93, 107.03, 100.67,
    28.99, 27.27, 63.83, 59.89, 91.50, 84.46, 103.97, 97.81, 109.27, 102.79,
    112.37, 105.63, 29.39, 27.50, 64.57, 60.03, 91.20, 83.85, 105.42, 98.72,
    110.79, 103.64, 113.87, 106.26, 28.32, 26.24, 61.87, 57.01, 86.44, 79.87,
    101.66, 94.28, 106.74, 98.86, 109.47, 101.15, 29.53, 27.31, 64.44, 59.31,
    89.96, 83.26, 106.03, 98.14, 111.29, 102.89, 114.08, 105.25, 29.48, 27.11,
    64.03, 58.93, 89.79, 83.95, 105.92, 97.41, 111.06, 102.11, 113.62, 104.46,
    28.06, 25.88, 60.99, 56.58, 86.74, 81.59, 100.84, 92.94, 105.70, 97.51,
    108.13, 99.96, 29.08, 26.86, 63.25, 58.80, 90.23, 84.88, 104.51, 96.45,
    109.55, 101.22, 112.09, 103.81, 28.96, 27.02, 63.36, 59.45, 91.43, 85.63,
    104.01, 96.95, 109.14, 101.86, 111.90, 104.69, 28.02, 26.33, 61.62, 57.95,
    88.82, 82.38, 100.52, 94.45, 105.60, 99.28, 108.52, 102.09, 29.04, 27.31,
    63.91, 60.07, 91.97, 85.14, 104.18, 97.96, 109.46, 102.96, 112.53, 105.86,
    29.41, 27.59, 64.70, 60.36, 91.84, 84.47, 105.47, 99.01, 110.86, 103.99,
    113.99, 106.71, 28.69, 26.67, 62.81, 58.02, 87.97, 81.07, 102.96, 95.81,
    108.15, 100.50, 111.00, 102.88, 29.64, 27.50, 64.80, 59.77, 90.62, 83.62,
    106.37, 98.78, 111.70, 103.60, 114.60, 106.02, 29.65, 27.30, 64.47, 59.28,
    90.15, 84.01, 106.52, 98.09, 111.72, 102.82, 114.35, 105.15, 28.50, 26.23,
    61.88, 57.22, 87.56, 82.27, 102.41, 94.23, 107.35, 98.82, 109.78, 101.22,
    29.28, 26.98, 63.61, 58.93, 90.28, 84.89, 105.24, 96.91, 110.31, 101.66,
    112.82, 104.17, 29.09, 27.04, 63.49, 59.42, 91.37, 85.78, 104.48, 97.04,
    109.58, 101.92, 112.27, 104.69, 28.25, 26.51, 62.04, 58.36, 89.60, 83.38,
    101.38, 95.07, 106.46, 99.92, 109.34, 102.76, 29.06, 27.29, 63.87, 60.08,
    92.16, 85.60, 104.26, 97.89, 109.51, 102.90, 112.52, 105.82, 29.37, 27.61,
    64.67, 60.52, 92.27, 84.98, 105.35, 99.05, 110.74, 104.06, 113.88, 106.87,
    28.88, 26.94, 63.35, 58.70, 89.06, 81.94, 103.62, 96.75, 108.88, 101.52,
    111.84, 104.01, 29.67, 27.62, 65.00, 60.12, 91.17, 83.95, 106.45, 99.20,
    111.83, 104.07, 114.82, 106.57, 29.76, 27.45, 64.81, 59.60, 90.49, 84.03,
    106.89, 98.65, 112.15, 103.41, 114.87, 105.75, 9.24, 8.58, 20.21, 18.65,
    28.28, 26.08, 33.16, 30.82, 34.83, 32.32, 35.74, 33.09, 26.11, 24.20,
    57.05, 52.58, 79.73, 73.64, 93.73, 86.94, 98.42, 91.17, 100.94, 93.29,
    26.99, 24.83, 58.66, 53.94, 82.08, 76.58, 96.96, 89.23, 101.68, 93.53,
    104.05, 95.67, 21.23, 19.55, 46.10, 42.68, 65.35, 61.43, 76.29, 70.22,
    79.96, 73.66, 81.78, 75.46, 27.84, 25.67, 60.49, 56.10, 86.00, 80.89,
    100.03, 92.18, 104.85, 96.71, 107.25, 99.12, 28.06, 26.12, 61.30, 57.42,
    88.31, 82.84, 100.78, 93.72, 105.72, 98.45, 108.34, 101.15, 24.17, 22.70,
    53.11, 49.97, 76.67, 71.26, 86.73, 81.40, 91.09, 85.56, 93.58, 87.99,
    28.42, 26.71, 62.51, 58.79, 90.12, 83.61, 101.98, 95.81, 107.13, 100.71,
    110.10, 103.56, 28.99, 27.24, 63.82, 59.66, 90.90, 83.66, 103.99, 97.73,
    109.30, 102.66, 112.40, 105.40, 26.21, 24.42, 57.44, 53.16, 80.63, 74.22,
    94.02, 87.68, 98.78, 91.99, 101.44, 94.22, 29.41, 27.35, 64.39, 59.49,
    90.21, 83.12, 105.53, 98.23, 110.85, 103.04, 113.78, 105.49, 29.64, 27.32,
    64.52, 59.31, 90.10, 83.78, 106.47, 98.18, 111.69, 102.91, 114.37, 105.24,
    26.94, 24.78, 58.49, 53.98, 82.49, 77.41, 96.81, 89.02, 101.48, 93.34,
    103.78, 95.56, 29.37, 27.03, 63.78, 58.97, 90.21, 84.75, 105.56, 97.11,
    110.65, 101.85, 113.16, 104.31, 29.26, 27.14, 63.79, 59.58, 91.58, 86.07,
    105.13, 97.43, 110.24, 102.30, 112.89, 105.04, 27.14, 25.42, 59.53, 55.98,
    86.01, 80.22, 97.41, 91.19, 102.27, 95.84, 104.98, 98.56, 29.19, 27.38,
    64.10, 60.30, 92.58, 86.18, 104.76, 98.22, 110.01, 103.24, 112.98, 106.17,
    29.56, 27.80, 65.09, 61.02, 93.16, 85.92, 106.03, 99.74, 111.44, 104.80,
    114.60, 107.68, 28.08, 26.24, 61.66, 57.25, 86.93, 79.93, 100.72, 94.22,
    105.84, 98.90, 108.76, 101.37, 29.89, 27.89, 65.58, 60.77, 92.22, 84.83,
    107.24, 100.15, 112.68, 105.10, 115.75, 107.67, 30.12, 27.83, 65.67, 60.42,
    91.67, 84.94, 108.15, 100.00, 113.51, 104.83, 116.32, 107.22, 28.38, 26.09,
    61.62, 56.75, 86.52, 80.99, 101.96, 93.75, 106.90, 98.28, 109.35, 100.56,
    29.86, 27.46, 64.83, 59.78, 91.26, 85.55, 107.31, 98.66, 112.49, 103.43,
    115.05, 105.86, 29.66, 27.42, 64.54, 60.07, 92.23, 86.76, 106.57, 98.46,
    111.73, 103.34, 114.33, 106.01, 28.11, 26.26, 61.54, 57.79, 88.85, 83.13,
    100.93, 94.19, 105.92, 98.97, 108.64, 101.75, 29.45, 27.56, 64.55, 60.67,
    93.25, 87.10, 105.73, 98.85, 110.98, 103.88, 113.88, 106.81, 29.70, 27.94,
    65.38, 61.42, 93.96, 86.89, 106.54, 100.21, 111.96, 105.32, 115.11, 108.27,
    28.75, 26.95, 63.22, 58.91, 89.58, 82.36, 103.11, 96.72, 108.38, 101.56,
    111.42, 104.19, 30.03, 28.11, 65.99, 61.36, 93.23, 85.71, 107.71, 100.89,
    113.20, 105.92, 116.36, 108.61, 30.31, 28.08, 66.21, 61.02, 92.52, 85.46,
    108.78, 100.89, 114.21, 105.80, 117.14, 108.25, 29.06, 26.74, 63.16, 58.09,
    88.39, 82.48, 104.41, 96.09, 109.49, 100.72, 112.05, 103.02, 30.14, 27.71,
    65.46, 60.24, 91.76, 85.78, 108.27, 99.58, 113.52, 104.38, 116.14, 106.78,
    29.91, 27.58, 64.99, 60.28, 92.40, 86.91, 107.47, 99.04, 112.65, 103.90,
    115.23, 106.50, 28.62, 26.64, 62.53, 58.58, 90.08, 84.50, 102.80, 95.60,
    107.84, 100.42, 110.51, 103.18, 29.60, 27.61, 64.75, 60.75, 93.42, 87.51,
    106.31, 99.06, 111.55, 104.08, 114.36, 106.98, 29.74, 27.95, 65.41, 61.52,
    94.30, 87.48, 106.71, 100.26, 112.10, 105.38, 115.20, 108.37, 29.05, 27.29,
    63.95, 59.78, 91.08, 83.83, 104.20, 97.93, 109.53, 102.87, 112.63, 105.61,
    30.05, 28.20, 66.11, 61.69, 93.88, 86.35, 107.77, 101.18, 113.28, 106.27,
    116.48, 109.05, 30.37, 28.24, 66.49, 61.43, 93.15, 85.83, 108.98, 101.43,
    114.47, 106.40, 117.50, 108.93, 29.47, 27.16, 64.13, 58.96, 89.56, 83.28,
    105.83, 97.59, 111.02, 102.29, 113.69, 104.61, 30.31, 27.90, 65.91, 60.60,
    92.14, 85.85, 108.88, 100.28, 114.20, 105.11, 116.90, 107.50, 30.10, 27.70,
    65.36, 60.42, 92.44, 86.85, 108.17, 99.51, 113.38, 104.36, 115.95, 106.89,
    28.97, 26.87, 63.15, 58.98, 90.66, 85.21, 104.07, 96.45, 109.14, 101.28,
    111.75, 103.98, 29.73, 27.64, 64.89, 60.72, 93.36, 87.66, 106.80, 99.18,
    112.02, 104.16, 114.75, 106.99, 29.76, 27.92, 65.36, 61.48, 94.39, 87.86,
    106.81, 100.14, 112.16, 105.26, 115.19, 108.25, 29.20, 27.46, 64.30, 60.28,
    92.03, 84.87, 104.74, 98.52, 110.09, 103.53, 113.21, 106.37, 30.02, 28.22,
    66.09, 61.86, 94.32, 86.88, 107.66, 101.23, 113.16, 106.35, 116.37, 109.22,
    30.37, 28.34, 66.62, 61.74, 93.69, 86.19, 108.96, 101.75, 114.48, 106.77,
    117.60, 109.39, 9.26, 8.57, 20.21, 18.60, 28.22, 26.11, 33.25, 30.78,
    34.90, 32.27, 35.78, 33.01, 26.16, 24.15, 57.00, 52.43, 79.57, 73.78,
    93.92, 86.78, 98.56, 90.98, 100.99, 93.05, 26.94, 24.77, 58.49, 53.89,
    82.20, 76.99, 96.80, 89.00, 101.48, 93.30, 103.80, 95.47, 21.17, 19.55,
    46.04, 42.80, 65.68, 61.79, 76.08, 70.21, 79.75, 73.68, 81.60, 75.57,
    27.77, 25.69, 60.45, 56.30, 86.47, 81.34, 99.78, 92.23, 104.61, 96.81,
    107.06, 99.34, 28.08, 26.24, 61.49, 57.77, 88.81, 83.04, 100.81, 94.14,
    105.80, 98.92, 108.53, 101.70, 24.28, 22.83, 53.42, 50.21, 76.88, 71.17,
    87.09, 81.89, 91.51, 86.07, 94.07, 88.49, 28.56, 26.87, 62.89, 59.05,
    90.31, 83.46, 102.46, 96.39, 107.68, 101.30, 110.72, 104.12, 29.17, 27.33,
    64.12, 59.70, 90.76, 83.44, 104.61, 98.08, 109.95, 102.98, 113.03, 105.63,
    26.30, 24.40, 57.50, 53.04, 80.41, 74.21, 94.39, 87.66, 99.12, 91.93,
    101.69, 94.08, 29.50, 27.32, 64.41, 59.33, 89.98, 83.16, 105.88, 98.14,
    111.16, 102.90, 113.99, 105.28, 29.62, 27.24, 64.36, 59.20, 90.12, 84.14,
    106.41, 97.90, 111.58, 102.62, 114.18, 104.97, 26.87, 24.75, 58.36, 54.07,
    82.82, 77.88, 96.55, 88.91, 101.20, 93.26, 103.50, 95.56, 29.29, 27.02,
    63.67, 59.10, 90.63, 85.26, 105.27, 97.05, 110.35, 101.83, 112.88, 104.40,
    29.24, 27.24, 63.91, 59.91, 92.13, 86.39, 105.03, 97.75, 110.19, 102.68,
    112.93, 105.52, 27.23, 25.58, 59.85, 56.30, 86.36, 80.21, 97.69, 91.73,
    102.62, 96.42, 105.43, 99.15, 29.30, 27.55, 64.46, 60.62, 92.89, 86.11,
    105.14, 98.81, 110.46, 103.86, 113.53, 106.80, 29.74, 27.93, 65.45, 61.14,
    93.11, 85.68, 106.66, 100.21, 112.11, 105.25, 115.29, 108.05, 28.21, 26.26,
    61.80, 57.16, 86.69, 79.82, 101.22, 94.32, 106.33, 98.95, 109.17, 101.33,
    30.02, 27.89, 65.68, 60.65, 91.96, 84.77, 107.72, 100.18, 113.13, 105.07,
    116.10, 107.56, 30.13, 27.76, 65.55, 60.27, 91.58, 85.22, 108.22, 99.75,
    113.53, 104.55, 116.23, 106.92, 28.31, 26.04, 61.46, 56.76, 86.77, 81.46,
    101.72, 93.55, 106.63, 98.10, 109.04, 100.45, 29.78, 27.42, 64.68, 59.83,
    91.58, 86.07, 107.03, 98.49, 112.18, 103.30, 114.73, 105.82, 29.61, 27.49,
    64.58, 60.35, 92.78, 87.17, 106.37, 98.65, 111.55, 103.59, 114.24, 106.38,
    28.16, 26.40, 61.81, 58.14, 89.30, 83.22, 101.09, 94.69, 106.14, 99.53,
    108.98, 102.35, 29.53, 27.72, 64.87, 61.03, 93.67, 87.13, 105.97, 99.41,
    111.30, 104.49, 114.31, 107.46, 29.87, 28.09, 65.77, 61.62, 94.03, 86.67,
    107.13, 100.76, 112.60, 105.87, 115.80, 108.76, 28.91, 27.00, 63.45, 58.88,
    89.37, 82.19, 103.70, 96.95, 108.97, 101.75, 111.96, 104.27, 30.18, 28.14,
    66.18, 61.29, 92.98, 85.56, 108.29, 101.05, 113.77, 106.03, 116.85, 108.61,
    30.35, 28.03, 66.15, 60.85, 92.34, 85.62, 108.99, 100.71, 114.38, 105.57,
    117.19, 107.97, 29.01, 26.67, 62.99, 58.03, 88.52, 82.91, 104.24, 95.84,
    109.28, 100.47, 111.78, 102.81, 30.07, 27.65, 65.28, 60.22, 91.97, 86.27,
    108.05, 99.34, 113.26, 104.16, 115.83, 106.62, 29.83, 27.60, 64.94, 60.50,
    92.91, 87.39, 107.20, 99.10, 112.39, 104.02, 115.02, 106.73, 28.64, 26.77,
    62.73, 58.93, 90.59, 84.71, 102.83, 96.03, 107.92, 100.91, 110.71, 103.75,
    29.64, 27.76, 65.01, 61.12, 93.92, 87.65, 106.42, 99.56, 111.71, 104.63,
    114.66, 107.59, 29.89, 28.12, 65.80, 61.79, 94.49, 87.32, 107.21, 100.86,
    112.67, 106.00, 115.85, 108.95, 29.23, 27.38, 64.25, 59.82, 90.94, 83.61,
    104.83, 98.28, 110.18, 103.19, 113.26, 105.84, 30.22, 28.27, 66.39, 61.69,
    93.69, 86.14, 108.41, 101.48, 113.93, 106.52, 117.08, 109.20, 30.46, 28.21,
    66.51, 61.27, 92.91, 85.88, 109.34, 101.34, 114.79, 106.26, 117.71, 108.71,
    29.44, 27.08, 63.97, 58.84, 89.58, 83.64, 105.77, 97.31, 110.91, 102.01,
    113.49, 104.34, 30.27, 27.83, 65.73, 60.51, 92.23, 86.27, 108.75, 100.00,
    114.02, 104.83, 116.64, 107.25, 30.02, 27.69, 65.24, 60.56, 92.88, 87.37,
    107.86, 99.45, 113.07, 104.34, 115.66, 106.97, 28.95, 26.97, 63.27, 59.31,
    91.21, 85.52, 103.97, 96.77, 109.08, 101.66, 111.80, 104.46, 29.73, 27.75,
    65.07, 61.07, 93.91, 87.92, 106.77, 99.57, 112.04, 104.62, 114.89, 107.54,
    29.88, 28.09, 65.73, 61.81, 94.70, 87.79, 107.20, 100.75, 112.62, 105.90,
    115.75, 108.89, 29.38, 27.59, 64.66, 60.40, 91.98, 84.63, 105.37, 98.99,
    110.75, 103.97, 113.89, 106.73, 30.20, 28.32, 66.43, 61.93, 94.21, 86.64,
    108.31, 101.64, 113.84, 106.74, 117.05, 109.52, 30.50, 28.33, 66.73, 61.62,
    93.42, 86.13, 109.44, 101.78, 114.94, 106.75, 117.96, 109.27,
];
