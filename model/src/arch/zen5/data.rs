//! Single-core FP32 GEMM throughput grid for AMD Zen 5.

/// Tabulated M extents. Values above 128 repeat the 16-wide pattern.
pub(super) static M_VALUES: [i64; 24] = [1, 15, 16, 17, 31, 32, 33, 47, 48, 49, 63, 64, 65, 79, 80, 81, 95, 96, 97, 111, 112, 113, 127, 128];
/// Tabulated N extents.
pub(super) static N_VALUES: [i64; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 16, 64, 256];
/// Tabulated K extents.
pub(super) static K_VALUES: [i64; 6] = [4, 16, 32, 48, 64, 128];

/// Flattened `[m][n][k][trans_a][trans_b]` GFLOPS grid.
#[rustfmt::skip]
pub(super) static GFLOPS: [f64; 6336] = [
    1.03, 0.96, 0.90, 0.84, 2.01, 1.91, 1.76, 1.69, 2.45, 2.38,
    2.18, 2.08, 2.71, 2.54, 2.38, 2.19, 2.80, 2.61, 2.43, 2.30,
    2.96, 2.80, 2.58, 2.48, 1.21, 1.15, 1.05, 1.02, 2.38, 2.32,
    2.12, 2.03, 2.97, 2.82, 2.63, 2.43, 3.22, 2.98, 2.79, 2.61,
    3.28, 3.14, 2.88, 2.78, 3.49, 3.39, 3.10, 2.99, 1.33, 1.29,
    1.18, 1.13, 2.67, 2.57, 2.38, 2.22, 3.30, 3.06, 2.88, 2.66,
    3.50, 3.31, 3.05, 2.94, 3.63, 3.53, 3.23, 3.09, 3.91, 3.78,
    3.49, 3.27, 1.44, 1.39, 1.28, 1.20, 2.89, 2.70, 2.54, 2.33,
    3.48, 3.26, 3.02, 2.88, 3.71, 3.61, 3.29, 3.17, 3.94, 3.77,
    3.50, 3.24, 4.25, 3.98, 3.74, 3.44, 1.53, 1.43, 1.34, 1.23,
    3.01, 2.80, 2.61, 2.46, 3.60, 3.47, 3.18, 3.07, 3.94, 3.80,
    3.51, 3.28, 4.17, 3.88, 3.64, 3.36, 4.44, 4.11, 3.85, 3.61,
    1.57, 1.46, 1.37, 1.29, 3.06, 2.93, 2.69, 2.60, 3.75, 3.64,
    3.35, 3.17, 4.14, 3.88, 3.64, 3.35, 4.27, 3.99, 3.71, 3.52,
    4.51, 4.29, 3.94, 3.80, 1.59, 1.52, 1.39, 1.35, 3.14, 3.06,
    2.80, 2.68, 3.92, 3.71, 3.47, 3.20, 4.24, 3.93, 3.67, 3.45,
    4.32, 4.16, 3.80, 3.68, 4.61, 4.49, 4.10, 3.94, 1.62, 1.58,
    1.44, 1.38, 3.27, 3.13, 2.90, 2.69, 4.02, 3.73, 3.50, 3.25,
    4.25, 4.05, 3.72, 3.59, 4.43, 4.31, 3.95, 3.75, 4.78, 4.60,
    4.26, 3.97, 1.79, 1.68, 1.56, 1.48, 3.50, 3.38, 3.09, 2.99,
    4.32, 4.17, 3.85, 3.61, 4.75, 4.41, 4.15, 3.83, 4.86, 4.58,
    4.23, 4.06, 5.15, 4.94, 4.53, 4.38, 1.95, 1.81, 1.69, 1.59,
    3.80, 3.63, 3.33, 3.22, 4.65, 4.52, 4.15, 3.93, 5.13, 4.81,
    4.51, 4.15, 5.29, 4.94, 4.59, 4.36, 5.59, 5.32, 4.89, 4.71,
    2.00, 1.89, 1.77, 1.63, 3.97, 3.68, 3.45, 3.22, 4.73, 4.53,
    4.15, 4.01, 5.14, 4.99, 4.59, 4.34, 5.47, 5.12, 4.80, 4.42,
    5.84, 5.41, 5.08, 4.72, 37.82, 36.64, 33.76, 31.76, 76.28, 71.72,
    67.20, 61.82, 92.44, 86.01, 80.19, 75.71, 97.89, 94.71, 86.52, 83.63,
    103.56, 99.74, 92.29, 86.16, 111.80, 105.74, 98.83, 91.07, 45.80, 43.08,
    40.36, 37.13, 90.67, 84.01, 78.72, 73.48, 108.10, 103.58, 94.91, 91.75,
    117.45, 114.02, 104.85, 98.99, 125.05, 116.85, 109.71, 100.92, 133.48, 123.66,
    116.08, 107.78, 50.63, 46.91, 43.96, 41.02, 98.56, 93.35, 86.01, 82.72,
    119.61, 116.52, 106.65, 101.80, 132.30, 124.88, 116.82, 107.57, 137.48, 127.66,
    119.26, 112.14, 145.31, 136.80, 126.47, 121.09, 53.16, 50.33, 46.38, 44.60,
    104.47, 101.60, 92.78, 89.33, 130.09, 124.20, 115.53, 107.03, 141.63, 131.20,
    123.09, 114.49, 144.31, 137.71, 126.41, 122.05, 153.45, 148.78, 135.87, 131.20,
    55.25, 53.72, 49.06, 47.25, 111.01, 107.09, 98.98, 92.58, 137.66, 127.88,
    120.17, 110.89, 145.98, 137.70, 127.15, 121.95, 150.80, 146.91, 134.31, 128.65,
    162.49, 157.45, 145.03, 136.47, 58.00, 55.97, 51.72, 48.40, 116.75, 109.27,
    102.54, 94.31, 140.85, 131.53, 122.26, 116.07, 149.58, 145.20, 132.58, 127.92,
    158.79, 152.20, 141.26, 131.26, 171.23, 161.12, 150.91, 138.85, 60.53, 56.67,
    53.18, 48.90, 119.37, 110.75, 103.56, 97.18, 142.42, 137.13, 125.43, 121.33,
    155.47, 150.44, 138.73, 130.27, 165.12, 153.72, 144.43, 133.04, 175.83, 162.90,
    152.69, 142.43, 61.57, 57.11, 53.42, 50.10, 119.80, 114.10, 104.83, 101.13,
    146.11, 142.20, 130.40, 123.86, 161.56, 151.73, 142.22, 130.82, 167.09, 155.59,
    144.96, 137.05, 176.56, 167.11, 154.02, 148.07, 66.87, 63.91, 59.41, 55.08,
    133.87, 124.40, 116.90, 107.84, 160.32, 151.13, 139.60, 133.82, 171.61, 167.18,
    152.81, 146.45, 182.98, 173.52, 161.98, 149.44, 196.64, 183.39, 172.25, 158.54,
    71.88, 69.37, 64.10, 59.98, 144.71, 135.43, 127.09, 116.89, 174.57, 163.02,
    151.54, 143.86, 185.39, 179.97, 164.33, 158.54, 196.82, 188.65, 175.09, 162.69,
    212.24, 199.69, 187.05, 172.09, 72.53, 70.09, 64.05, 61.93, 144.80, 140.65,
    129.27, 122.19, 180.53, 168.84, 158.47, 145.76, 192.79, 180.15, 167.38, 159.03,
    197.57, 191.87, 175.19, 168.96, 212.09, 206.48, 189.26, 179.97, 41.57, 39.68,
    36.92, 34.20, 83.16, 77.23, 72.58, 66.99, 99.52, 93.93, 86.71, 83.20,
    106.65, 103.90, 95.00, 90.96, 113.74, 107.73, 100.62, 92.78, 122.17, 113.84,
    106.95, 98.47, 49.94, 46.39, 43.60, 40.23, 97.74, 91.32, 84.86, 80.60,
    117.22, 113.82, 103.93, 100.25, 129.07, 123.65, 114.80, 106.62, 135.93, 125.96,
    118.27, 109.69, 144.11, 134.08, 125.01, 118.01, 54.59, 50.98, 47.39, 44.99,
    106.44, 102.54, 93.78, 90.71, 131.24, 126.94, 117.09, 109.89, 144.47, 134.45,
    126.34, 116.40, 148.05, 139.19, 128.79, 123.17, 156.68, 150.09, 137.55, 132.96,
    57.41, 55.28, 50.56, 48.91, 114.24, 111.16, 101.97, 96.80, 142.60, 133.85,
    125.48, 115.41, 152.83, 142.37, 132.60, 125.44, 156.23, 151.34, 138.22, 133.54,
    167.41, 163.09, 149.26, 142.51, 60.41, 58.79, 53.91, 51.21, 121.95, 115.74,
    108.00, 99.68, 149.08, 138.18, 129.39, 121.00, 157.47, 151.15, 138.41, 133.85,
    165.29, 160.30, 147.55, 139.04, 178.58, 170.53, 158.61, 146.95, 63.72, 60.50,
    56.44, 52.11, 127.01, 117.74, 110.59, 102.42, 151.66, 143.93, 132.47, 127.56,
    163.32, 159.07, 145.68, 138.83, 174.23, 164.16, 153.68, 141.44, 186.74, 173.49,
    163.03, 150.43, 65.86, 61.06, 57.36, 53.10, 128.57, 120.66, 111.77, 106.71,
    154.77, 150.61, 137.56, 132.29, 170.85, 162.81, 151.60, 140.26, 179.10, 165.91,
    155.57, 144.94, 189.59, 177.02, 164.57, 156.20, 66.32, 62.21, 57.64, 55.01,
    129.61, 125.38, 114.54, 110.72, 160.47, 154.57, 143.01, 133.53, 176.05, 163.41,
    153.55, 141.84, 179.89, 170.01, 156.82, 150.61, 190.64, 183.53, 167.89, 162.40,
    73.32, 68.89, 64.56, 59.39, 145.01, 134.39, 125.88, 117.64, 172.91, 165.87,
    151.92, 146.90, 188.07, 182.46, 167.89, 158.31, 200.15, 186.85, 175.46, 161.44,
    213.51, 197.79, 185.61, 172.52, 78.98, 74.99, 69.95, 64.58, 157.42, 145.93,
    137.07, 126.95, 187.97, 178.39, 164.18, 158.11, 202.42, 197.16, 180.57, 172.06,
    215.96, 203.46, 190.48, 175.30, 231.46, 215.02, 202.06, 186.45, 78.97, 76.93,
    70.31, 67.40, 159.12, 152.59, 141.58, 131.62, 196.32, 181.95, 170.89, 158.36,
    207.61, 197.19, 181.41, 174.77, 215.78, 210.14, 192.51, 183.31, 232.90, 224.56,
    207.63, 194.07, 22.65, 21.26, 19.94, 18.33, 44.77, 41.50, 38.85, 36.35,
    53.39, 51.27, 46.94, 45.40, 58.13, 56.36, 51.89, 48.87, 61.83, 57.67,
    54.17, 49.85, 65.93, 61.07, 57.29, 53.30, 26.89, 24.92, 23.34, 21.83,
    52.33, 49.69, 45.72, 44.04, 63.65, 61.99, 56.78, 54.08, 70.41, 66.30,
    62.08, 57.13, 73.00, 67.87, 63.32, 59.69, 77.14, 72.80, 67.21, 64.48,
    29.23, 27.74, 25.53, 24.58, 57.53, 55.99, 51.14, 49.17, 71.71, 68.29,
    63.61, 58.83, 77.90, 72.16, 67.65, 63.06, 79.35, 75.91, 69.60, 67.26,
    84.46, 82.01, 74.88, 72.23, 31.02, 30.19, 27.57, 26.51, 62.39, 60.07,
    55.59, 51.88, 77.24, 71.68, 67.35, 62.23, 81.81, 77.36, 71.34, 68.54,
    84.70, 82.52, 75.49, 72.16, 91.33, 88.35, 81.49, 76.49, 32.99, 31.77,
    29.40, 27.45, 66.34, 61.97, 58.18, 53.53, 79.88, 74.74, 69.38, 66.02,
    84.96, 82.58, 75.40, 72.66, 90.32, 86.37, 80.27, 74.44, 97.33, 91.37,
    85.66, 78.79, 34.67, 32.39, 30.41, 27.98, 68.25, 63.39, 59.20, 55.70,
    81.48, 78.62, 71.87, 69.51, 89.13, 86.10, 79.50, 74.47, 94.53, 87.88,
    82.58, 76.15, 100.56, 93.20, 87.28, 81.61, 35.40, 32.87, 30.71, 28.87,
    68.88, 65.77, 60.36, 58.28, 84.21, 81.88, 75.17, 71.22, 93.06, 87.21,
    81.81, 75.24, 96.04, 89.59, 83.35, 79.00, 101.50, 96.31, 88.65, 85.35,
    35.53, 33.90, 31.12, 30.05, 70.20, 68.40, 62.54, 59.88, 87.63, 83.01,
    77.53, 71.49, 94.73, 87.85, 82.20, 77.01, 96.53, 92.82, 84.94, 82.16,
    103.00, 100.23, 91.54, 88.04, 39.73, 36.89, 34.66, 32.01, 77.71, 72.67,
    67.48, 64.18, 93.27, 90.62, 82.75, 79.76, 102.77, 98.33, 91.36, 84.77,
    108.12, 100.17, 94.03, 87.30, 114.58, 106.68, 99.40, 93.96, 42.97, 40.15,
    37.70, 34.68, 84.59, 78.57, 73.38, 69.03, 100.99, 97.45, 89.08, 86.16,
    110.48, 106.71, 98.54, 92.30, 117.16, 108.92, 102.35, 94.38, 124.64, 115.52,
    108.18, 101.15, 43.03, 41.75, 38.41, 36.23, 86.82, 81.84, 76.60, 70.51,
    105.47, 97.99, 91.49, 86.14, 111.57, 107.73, 98.46, 95.22, 117.79, 113.70,
    105.04, 98.32, 127.21, 120.64, 112.61, 103.90, 46.66, 45.20, 41.28, 39.88,
    93.37, 90.52, 83.34, 78.50, 116.24, 108.43, 101.84, 93.73, 123.81, 116.03,
    107.58, 102.56, 127.18, 123.70, 112.97, 108.74, 136.72, 132.96, 122.05, 115.66,
    56.05, 54.36, 50.04, 47.15, 113.08, 106.49, 99.71, 91.76, 137.24, 127.59,
    119.05, 112.22, 145.24, 140.35, 128.25, 124.01, 153.46, 148.01, 136.82, 127.93,
    165.71, 156.99, 146.62, 135.20, 63.12, 59.47, 55.68, 51.24, 125.12, 115.91,
    108.67, 101.29, 149.18, 142.70, 130.85, 126.44, 161.83, 157.24, 144.47, 136.63,
    172.41, 161.31, 151.39, 139.24, 184.15, 170.65, 160.24, 148.59, 67.48, 62.51,
    58.62, 54.61, 131.41, 124.25, 114.58, 110.08, 159.22, 155.13, 141.91, 135.66,
    176.11, 166.50, 155.64, 143.40, 183.28, 170.07, 159.00, 149.26, 193.75, 182.11,
    168.52, 161.14, 69.52, 65.70, 60.60, 58.21, 136.47, 132.63, 121.10, 116.71,
    169.80, 162.37, 150.90, 139.96, 185.13, 171.50, 160.97, 149.51, 188.67, 179.75,
    165.12, 159.31, 200.49, 194.20, 177.36, 171.36, 71.32, 69.29, 63.27, 60.99,
    143.16, 138.29, 127.69, 119.62, 177.72, 165.22, 155.26, 143.16, 188.63, 177.65,
    164.20, 157.27, 194.58, 189.52, 173.21, 166.12, 209.57, 203.27, 187.08, 176.33,
    74.21, 71.71, 66.19, 62.04, 149.48, 140.08, 131.40, 120.85, 180.57, 168.42,
    156.70, 148.52, 191.58, 185.80, 169.66, 163.80, 203.18, 195.05, 180.85, 168.29,
    219.18, 206.55, 193.35, 177.96, 77.07, 72.26, 67.77, 62.32, 152.16, 141.10,
    132.03, 123.69, 181.49, 174.49, 159.69, 154.46, 197.84, 191.65, 176.57, 166.08,
    210.30, 195.98, 184.11, 169.50, 224.10, 207.59, 194.68, 181.33, 81.86, 79.76,
    72.94, 69.79, 165.06, 157.94, 146.73, 136.16, 203.27, 188.32, 176.78, 164.11,
    214.82, 204.52, 187.94, 181.28, 223.77, 217.79, 199.70, 189.74, 241.61, 232.51,
    215.25, 200.77, 88.39, 85.89, 78.42, 75.59, 177.44, 171.40, 158.27, 148.26,
    220.27, 204.78, 192.43, 177.44, 233.79, 220.19, 203.51, 194.93, 241.18, 234.91,
    214.68, 205.90, 259.76, 251.94, 231.88, 218.55, 91.81, 85.92, 79.74, 75.90,
    179.21, 173.02, 158.13, 152.93, 221.43, 213.76, 197.47, 184.84, 243.37, 226.16,
    212.53, 196.04, 249.02, 234.71, 216.83, 207.83, 263.69, 253.25, 231.86, 224.23,
    48.60, 47.35, 43.31, 41.40, 98.01, 93.68, 87.09, 80.74, 120.58, 111.70,
    104.83, 97.41, 127.40, 121.45, 111.53, 107.64, 132.86, 129.27, 118.59, 112.54,
    143.48, 137.92, 127.78, 119.05, 58.84, 56.27, 52.30, 48.50, 117.84, 109.52,
    102.92, 94.92, 141.15, 133.01, 122.90, 117.77, 151.04, 147.13, 134.48, 128.92,
    161.03, 152.78, 142.58, 131.57, 173.08, 161.46, 151.65, 139.56, 65.79, 61.16,
    57.48, 53.00, 128.88, 120.26, 111.86, 106.08, 154.41, 149.80, 136.79, 132.04,
    169.86, 162.97, 151.17, 140.59, 179.13, 166.04, 155.95, 144.46, 190.00, 176.62,
    164.81, 155.33, 69.52, 64.85, 60.33, 57.18, 135.49, 130.33, 119.26, 115.35,
    166.81, 161.53, 148.87, 139.95, 183.80, 171.23, 160.87, 148.13, 188.56, 177.01,
    163.94, 156.56, 199.47, 190.78, 174.95, 169.05, 71.67, 68.91, 63.06, 61.00,
    142.46, 138.68, 127.12, 120.87, 177.86, 167.19, 156.66, 144.11, 190.89, 177.65,
    165.60, 156.40, 194.99, 188.68, 172.36, 166.59, 208.79, 203.42, 186.08, 177.91,
    74.43, 72.47, 66.42, 63.18, 150.25, 142.83, 133.17, 123.02, 183.95, 170.45,
    159.70, 149.12, 194.29, 186.20, 170.61, 164.93, 203.63, 197.66, 181.79, 171.59,
    220.00, 210.42, 195.54, 181.38, 77.88, 74.08, 69.05, 63.80, 155.43, 144.14,
    135.42, 125.28, 185.70, 175.93, 162.07, 155.91, 199.67, 194.52, 178.04, 169.92,
    213.02, 201.02, 188.06, 173.16, 228.47, 212.43, 199.62, 184.04, 80.15, 74.35,
    69.85, 64.60, 156.58, 146.73, 136.06, 129.70, 188.26, 183.10, 167.21, 160.97,
    207.68, 198.23, 184.42, 170.81, 218.02, 201.96, 189.47, 176.26, 230.88, 215.33,
    200.36, 189.87, 85.74, 83.09, 76.53, 72.02, 172.92, 162.65, 152.37, 140.18,
    209.63, 195.02, 181.85, 171.63, 221.96, 214.69, 196.13, 189.60, 234.75, 226.17,
    209.22, 195.40, 253.44, 239.80, 224.08, 206.53, 92.26, 89.82, 82.32, 78.31,
    186.23, 177.03, 165.05, 152.47, 227.99, 211.26, 197.94, 184.82, 240.81, 230.79,
    211.46, 204.43, 252.39, 244.99, 225.32, 212.67, 272.68, 260.79, 242.36, 224.80,
    94.45, 89.89, 82.61, 79.67, 186.28, 181.42, 165.78, 159.06, 232.38, 220.72,
    205.88, 190.10, 251.83, 233.38, 218.60, 204.27, 256.54, 246.06, 225.38, 217.92,
    273.39, 265.78, 242.69, 233.79, 33.90, 32.82, 30.25, 28.44, 68.35, 64.21,
    60.18, 55.36, 82.77, 77.05, 71.80, 67.85, 87.68, 84.88, 77.53, 74.93,
    92.81, 89.33, 82.69, 77.14, 100.18, 94.68, 88.52, 81.55, 41.04, 38.57,
    36.14, 33.25, 81.19, 75.24, 70.48, 65.85, 96.81, 92.83, 85.04, 82.22,
    105.26, 102.14, 93.97, 88.64, 112.04, 104.62, 98.24, 90.38, 119.54, 110.74,
    103.93, 96.57, 45.34, 42.01, 39.36, 36.76, 88.25, 83.66, 77.04, 74.14,
    107.18, 104.40, 95.58, 91.17, 118.56, 111.81, 104.63, 96.33, 123.10, 114.35,
    106.79, 100.49, 130.10, 122.58, 113.27, 108.53, 47.60, 45.10, 41.55, 39.97,
    93.60, 91.05, 83.15, 80.02, 116.59, 111.22, 103.50, 95.83, 126.84, 117.49,
    110.21, 102.58, 129.22, 123.42, 113.24, 109.37, 137.46, 133.34, 121.76, 117.54,
    49.50, 48.14, 43.97, 42.32, 99.49, 95.92, 88.69, 82.89, 123.31, 114.50,
    107.60, 99.33, 130.70, 123.39, 113.89, 109.30, 135.12, 131.64, 120.37, 115.22,
    145.63, 141.04, 129.97, 122.20, 51.98, 50.13, 46.34, 43.33, 104.60, 97.83,
    91.83, 84.46, 126.11, 117.84, 109.49, 104.02, 133.99, 130.13, 118.82, 114.59,
    142.32, 136.30, 126.56, 117.53, 153.43, 144.26, 135.16, 124.34, 54.23, 50.74,
    47.62, 43.80, 106.89, 99.20, 92.72, 87.08, 127.55, 122.90, 112.39, 108.72,
    139.34, 134.75, 124.32, 116.64, 147.92, 137.64, 129.33, 119.17, 157.46, 145.90,
    136.71, 127.63, 55.13, 51.16, 47.83, 44.90, 107.28, 102.25, 93.91, 90.63,
    130.93, 127.40, 116.87, 110.91, 144.76, 135.85, 127.37, 117.15, 149.60, 139.39,
    129.80, 122.83, 158.09, 149.75, 137.96, 132.70, 59.93, 57.23, 53.23, 49.32,
    119.92, 111.39, 104.67, 96.60, 143.54, 135.42, 125.04, 119.94, 153.77, 149.80,
    136.96, 131.17, 163.98, 155.37, 145.09, 133.81, 176.16, 164.20, 154.25, 142.00,
    64.43, 62.13, 57.44, 53.70, 129.65, 121.25, 113.81, 104.68, 156.30, 146.06,
    135.70, 128.93, 166.08, 161.29, 147.27, 142.03, 176.40, 168.94, 156.87, 145.66,
    190.17, 178.79, 167.52, 154.11, 64.97, 62.82, 57.39, 55.49, 129.77, 126.00,
    115.85, 109.41, 161.74, 151.17, 141.92, 130.54, 172.62, 161.40, 149.89, 142.53,
    176.99, 171.95, 157.00, 151.36, 190.06, 184.99, 169.62, 161.17, 48.80, 45.81,
    42.42, 40.51, 95.40, 92.35, 84.35, 81.52, 118.19, 113.76, 105.31, 98.25,
    129.59, 120.24, 112.98, 104.42, 132.36, 125.20, 115.43, 110.93, 140.31, 135.18,
    123.62, 119.58, 57.29, 55.44, 50.64, 48.95, 114.52, 111.13, 102.23, 96.45,
    142.68, 133.24, 125.12, 115.11, 152.15, 142.39, 132.15, 125.79, 156.11, 151.74,
    138.56, 133.50, 167.72, 163.19, 149.70, 142.09, 63.92, 62.05, 57.06, 53.86,
    128.99, 121.66, 113.84, 104.81, 156.78, 145.63, 136.00, 127.97, 165.82, 160.03,
    146.28, 141.48, 174.98, 168.98, 156.06, 146.16, 188.99, 179.34, 167.35, 154.45,
    69.54, 65.62, 61.40, 56.53, 138.01, 127.84, 119.92, 111.61, 164.57, 157.17,
    144.22, 139.28, 178.25, 173.31, 159.12, 150.73, 189.99, 178.00, 166.99, 153.57,
    203.08, 188.25, 176.82, 163.77, 73.00, 67.62, 63.44, 59.02, 142.21, 134.25,
    123.91, 118.91, 172.07, 167.64, 153.29, 146.74, 190.27, 180.19, 168.31, 155.18,
    198.32, 183.93, 172.08, 161.27, 209.69, 196.80, 182.29, 174.05, 74.34, 70.15,
    64.76, 62.13, 145.79, 141.57, 129.27, 124.68, 181.23, 173.59, 161.18, 149.68,
    197.87, 183.34, 172.15, 159.69, 201.73, 191.87, 176.39, 170.06, 214.24, 207.28,
    189.35, 183.03, 75.59, 73.39, 67.01, 64.64, 151.59, 146.61, 135.25, 126.92,
    188.37, 175.29, 164.71, 151.76, 200.14, 188.19, 174.11, 166.54, 206.17, 200.75,
    183.41, 176.12, 221.94, 215.46, 198.13, 187.06, 78.15, 75.61, 69.73, 65.46,
    157.50, 147.82, 138.59, 127.46, 190.53, 177.51, 165.31, 156.41, 201.97, 195.67,
    178.71, 172.64, 213.97, 205.71, 190.56, 177.58, 230.90, 217.95, 203.88, 187.74,
    84.69, 80.78, 74.17, 71.60, 167.30, 162.98, 149.01, 142.72, 208.82, 197.88,
    184.78, 170.41, 225.81, 209.38, 195.94, 183.51, 230.09, 221.16, 202.42, 195.78,
    245.46, 238.83, 218.12, 209.83, 92.14, 86.94, 80.27, 77.00, 180.69, 175.48,
    160.23, 154.53, 224.63, 215.15, 199.77, 185.51, 245.25, 227.24, 213.36, 197.93,
    250.03, 237.81, 218.63, 210.78, 265.54, 256.91, 234.69, 226.85, 96.02, 89.15,
    83.77, 77.35, 187.82, 175.61, 163.09, 155.07, 225.39, 218.97, 199.94, 192.76,
    248.32, 237.65, 220.76, 204.88, 261.29, 242.08, 227.26, 210.95, 276.92, 257.80,
    240.24, 227.03, 49.37, 47.15, 43.26, 41.78, 97.61, 95.10, 86.97, 83.22,
    121.86, 115.34, 107.76, 99.33, 131.63, 122.10, 114.21, 107.09, 134.15, 129.09,
    118.11, 114.24, 143.20, 139.38, 127.31, 122.38, 58.61, 57.10, 52.22, 49.98,
    118.16, 113.11, 105.06, 97.52, 145.57, 134.87, 126.62, 117.51, 153.86, 146.42,
    134.57, 129.78, 160.20, 155.94, 142.96, 135.88, 172.96, 166.51, 154.11, 143.80,
    65.95, 63.16, 58.65, 54.46, 132.20, 122.98, 115.56, 106.50, 158.51, 149.13,
    137.92, 131.99, 169.38, 164.95, 150.72, 144.67, 180.51, 171.54, 159.96, 147.74,
    194.13, 181.32, 170.25, 156.63, 71.29, 66.34, 62.33, 57.43, 139.79, 130.29,
    121.29, 114.83, 167.32, 162.17, 148.10, 143.04, 183.87, 176.68, 163.73, 152.49,
    194.16, 180.04, 169.14, 156.51, 206.06, 191.39, 178.74, 168.17, 73.95, 68.90,
    64.17, 60.72, 144.06, 138.38, 126.68, 122.52, 177.11, 171.69, 158.09, 148.86,
    195.31, 182.15, 171.09, 157.47, 200.59, 188.03, 174.31, 166.22, 212.14, 202.57,
    185.89, 179.52, 75.30, 72.30, 66.20, 64.02, 149.49, 145.59, 133.37, 127.00,
    186.67, 175.75, 164.58, 151.44, 200.64, 186.55, 174.05, 164.10, 204.81, 197.95,
    180.87, 174.88, 219.14, 213.50, 195.21, 186.90, 77.50, 75.48, 69.13, 65.86,
    156.41, 148.93, 138.74, 128.29, 191.77, 177.66, 166.55, 155.28, 202.55, 193.81,
    177.69, 171.72, 211.97, 205.93, 189.23, 178.91, 228.99, 219.36, 203.66, 189.16,
    80.63, 76.81, 71.54, 66.17, 161.09, 149.47, 140.45, 129.79, 192.59, 182.15,
    167.95, 161.39, 206.77, 201.45, 184.30, 176.14, 220.57, 208.48, 194.91, 179.56,
    236.73, 220.31, 207.01, 190.73, 86.07, 83.35, 76.13, 73.56, 172.17, 166.97,
    153.69, 144.81, 214.39, 200.04, 187.88, 172.89, 228.42, 213.99, 198.45, 189.13,
    234.57, 228.12, 208.31, 200.57, 252.13, 245.22, 225.06, 213.36, 93.33, 89.61,
    82.05, 79.35, 185.29, 180.45, 165.31, 157.41, 231.37, 217.82, 203.98, 187.70,
    248.68, 231.22, 215.72, 203.39, 253.85, 245.35, 224.18, 216.76, 271.62, 264.62,
    241.96, 231.65, 97.59, 90.48, 84.68, 79.28, 189.90, 180.51, 166.00, 159.99,
    231.19, 225.11, 206.29, 196.29, 255.71, 240.56, 225.34, 207.32, 264.89, 246.40,
    229.78, 216.83, 279.91, 264.42, 243.97, 234.24, 37.63, 36.47, 33.31, 32.17,
    75.34, 73.00, 67.24, 63.28, 93.76, 87.41, 82.11, 75.58, 99.80, 93.60,
    86.74, 82.76, 102.58, 99.81, 91.15, 87.70, 110.31, 107.24, 98.48, 93.25,
    45.23, 43.84, 40.37, 38.01, 91.23, 85.84, 80.40, 73.98, 110.64, 102.90,
    95.97, 90.54, 117.12, 113.25, 103.47, 100.03, 123.83, 119.35, 110.38, 103.13,
    133.70, 126.56, 118.24, 109.00, 50.92, 47.94, 44.90, 41.31, 100.88, 93.46,
    87.60, 81.71, 120.28, 115.15, 105.55, 102.01, 130.57, 126.82, 116.57, 110.15,
    139.07, 130.03, 122.06, 112.27, 148.49, 137.58, 129.17, 119.86, 54.41, 50.40,
    47.25, 44.05, 105.93, 100.25, 92.40, 88.83, 128.45, 125.14, 114.51, 109.39,
    142.08, 134.22, 125.51, 115.61, 147.75, 137.15, 128.18, 120.42, 156.18, 146.91,
    135.89, 130.02, 56.04, 53.01, 48.87, 46.97, 110.07, 107.01, 97.71, 94.12,
    137.01, 130.91, 121.72, 112.82, 149.27, 138.27, 129.76, 120.61, 152.10, 145.03,
    133.18, 128.54, 161.69, 156.69, 143.10, 138.22, 57.52, 55.91, 51.05, 49.19,
    115.51, 111.51, 103.01, 96.43, 143.32, 133.19, 125.16, 115.45, 152.05, 143.32,
    132.40, 126.90, 156.96, 152.90, 139.76, 133.96, 169.10, 163.93, 150.94, 142.15,
    59.88, 57.82, 53.40, 50.01, 120.58, 112.92, 105.95, 97.44, 145.56, 135.84,
    126.33, 119.83, 154.50, 149.91, 136.89, 132.12, 163.94, 157.26, 145.89, 135.65,
    176.82, 166.50, 155.91, 143.47, 62.17, 58.24, 54.64, 50.25, 122.67, 113.78,
    106.43, 99.79, 146.33, 140.80, 128.82, 124.61, 159.63, 154.56, 142.46, 133.88,
    169.61, 157.99, 148.43, 136.69, 180.68, 167.38, 156.93, 146.28, 66.04, 64.34,
    58.85, 56.28, 133.18, 127.34, 118.36, 109.76, 163.90, 151.83, 142.50, 132.38,
    173.18, 165.02, 151.58, 146.26, 180.54, 175.68, 161.14, 152.97, 194.96, 187.47,
    173.64, 161.84, 71.29, 69.30, 63.28, 60.97, 143.18, 138.21, 127.68, 119.51,
    177.64, 165.08, 155.13, 143.09, 188.46, 177.64, 164.10, 157.29, 194.55, 189.52,
    173.23, 166.03, 209.59, 203.19, 187.09, 176.18, 74.01, 69.31, 64.29, 61.25,
    144.51, 139.61, 127.58, 123.37, 178.68, 172.37, 159.31, 149.00, 196.27, 182.32,
    171.33, 158.10, 200.73, 189.36, 174.85, 167.70, 212.61, 204.35, 187.03, 180.90,
    49.82, 46.20, 43.40, 40.16, 97.29, 91.24, 84.56, 80.67, 117.05, 113.88,
    104.00, 100.06, 129.17, 123.19, 114.66, 106.14, 135.50, 125.52, 117.73, 109.60,
    143.46, 133.88, 124.51, 118.09, 58.45, 54.79, 50.79, 48.43, 114.18, 110.39,
    100.86, 97.51, 141.29, 136.18, 125.94, 117.67, 155.09, 144.00, 135.32, 124.94,
    158.53, 149.70, 138.15, 132.61, 167.96, 161.59, 147.85, 143.01, 63.75, 61.61,
    56.30, 54.44, 127.28, 123.62, 113.63, 107.38, 158.68, 148.37, 139.27, 128.10,
    169.42, 158.35, 147.10, 139.80, 173.65, 168.66, 154.00, 148.51, 186.43, 181.49,
    166.37, 158.17, 68.62, 66.66, 61.26, 57.92, 138.50, 130.85, 122.35, 112.70,
    168.60, 156.49, 146.26, 137.40, 178.24, 171.78, 157.08, 151.94, 187.83, 181.61,
    167.57, 157.19, 202.89, 192.86, 179.82, 166.10, 73.24, 69.22, 64.72, 59.62,
    145.51, 134.80, 126.50, 117.57, 173.56, 165.48, 151.95, 146.66, 187.70, 182.61,
    167.54, 158.96, 200.13, 187.77, 176.07, 161.93, 214.08, 198.53, 186.52, 172.56,
    76.06, 70.46, 66.13, 61.44, 148.23, 139.71, 129.07, 123.70, 179.09, 174.46,
    159.46, 152.85, 197.98, 187.80, 175.28, 161.73, 206.67, 191.58, 179.36, 167.82,
    218.57, 204.84, 189.92, 181.07, 76.88, 72.42, 66.93, 64.12, 150.61, 146.13,
    133.44, 128.79, 187.05, 179.44, 166.46, 154.79, 204.50, 189.55, 178.03, 164.94,
    208.59, 198.05, 182.23, 175.54, 221.39, 213.93, 195.49, 189.02, 77.66, 75.33,
    68.79, 66.41, 155.61, 150.67, 138.87, 130.52, 193.53, 180.27, 169.37, 155.96,
    205.84, 193.26, 178.97, 170.94, 211.77, 206.12, 188.27, 180.99, 227.83, 221.36,
    203.40, 192.35, 86.76, 80.50, 75.27, 70.63, 168.83, 160.86, 147.76, 142.58,
    205.99, 200.45, 183.85, 174.55, 227.76, 213.82, 200.45, 184.36, 235.46, 219.32,
    204.28, 193.23, 248.82, 235.59, 217.09, 208.76, 94.27, 87.33, 81.96, 76.15,
    183.72, 173.16, 159.97, 153.33, 221.98, 216.23, 197.65, 189.45, 245.39, 232.76,
    217.25, 200.45, 256.15, 237.46, 222.30, 208.01, 270.90, 253.89, 235.40, 224.43,
    95.60, 91.32, 84.93, 78.70, 191.33, 177.74, 167.03, 154.12, 229.05, 216.06,
    199.51, 191.34, 245.32, 238.99, 218.49, 209.29, 261.60, 247.93, 231.50, 213.52,
    281.06, 262.01, 246.13, 226.57, 50.31, 46.70, 43.64, 41.00, 97.90, 93.39,
    85.74, 82.77, 119.58, 116.32, 106.74, 101.22, 132.19, 123.96, 116.25, 106.92,
    136.51, 127.26, 118.45, 112.18, 144.26, 136.77, 125.94, 121.20, 58.80, 56.07,
    51.49, 49.69, 116.13, 113.13, 103.42, 99.09, 144.94, 137.40, 128.28, 118.33,
    156.79, 145.37, 136.06, 127.38, 159.75, 153.50, 140.51, 135.89, 170.39, 165.77,
    151.39, 145.68, 64.83, 63.15, 57.72, 55.33, 130.63, 125.24, 116.22, 108.02,
    161.14, 149.34, 140.25, 129.99, 170.39, 161.88, 148.91, 143.48, 177.14, 172.50,
    158.04, 150.45, 191.20, 184.32, 170.44, 159.28, 70.42, 67.55, 62.66, 58.27,
    141.29, 131.56, 123.61, 113.85, 169.57, 159.30, 147.47, 140.92, 180.97, 176.17,
    160.93, 154.65, 192.76, 183.48, 170.95, 158.05, 207.42, 193.98, 182.08, 167.47,
    74.73, 69.60, 65.39, 60.22, 146.67, 136.56, 127.25, 120.27, 175.42, 169.84,
    155.13, 149.91, 192.56, 185.30, 171.55, 160.01, 203.58, 188.88, 177.47, 164.04,
    216.18, 200.65, 187.54, 176.15, 76.67, 71.37, 66.52, 62.84, 149.31, 143.19,
    131.16, 126.82, 183.29, 177.84, 163.62, 154.32, 202.26, 188.85, 177.34, 163.16,
    207.98, 194.68, 180.66, 172.00, 219.90, 209.63, 192.51, 185.79, 77.43, 74.22,
    68.00, 65.74, 153.53, 149.55, 136.92, 130.59, 191.71, 180.78, 169.18, 155.74,
    206.37, 191.72, 179.02, 168.50, 210.54, 203.22, 185.75, 179.65, 225.10, 219.27,
    200.42, 192.13, 79.15, 77.11, 70.58, 67.35, 159.71, 152.33, 141.77, 131.24,
    196.11, 181.66, 170.39, 158.62, 207.15, 197.89, 181.56, 175.36, 216.45, 210.43,
    193.23, 182.99, 233.81, 224.32, 208.07, 193.51, 87.28, 81.90, 75.87, 72.43,
    170.60, 165.10, 150.81, 145.76, 211.30, 203.45, 188.29, 175.73, 231.74, 215.06,
    202.08, 186.72, 236.75, 223.84, 206.42, 198.32, 250.92, 241.67, 221.04, 213.81,
    95.03, 88.45, 82.44, 77.88, 185.05, 177.48, 162.57, 157.19, 227.18, 220.43,
    202.80, 191.27, 250.70, 234.07, 219.80, 202.23, 257.78, 241.30, 223.91, 213.19,
    272.55, 259.83, 238.61, 230.28, 97.88, 91.92, 86.16, 79.25, 193.51, 179.36,
    167.96, 157.06, 230.75, 221.48, 202.82, 196.13, 251.13, 243.55, 224.17, 211.25,
    267.18, 249.31, 234.15, 215.47, 284.95, 263.95, 247.66, 230.31, 40.47, 38.02,
    35.19, 33.64, 79.16, 76.67, 70.02, 67.65, 98.12, 94.38, 87.40, 81.48,
    107.52, 99.74, 93.71, 86.65, 109.78, 103.93, 95.78, 92.09, 116.40, 112.22,
    102.61, 99.25, 47.54, 46.03, 42.04, 40.62, 95.07, 92.22, 84.87, 80.00,
    118.41, 110.51, 103.78, 95.50, 126.19, 118.18, 109.62, 104.43, 129.55, 125.96,
    115.03, 110.78, 139.22, 135.43, 124.27, 117.86, 53.06, 51.49, 47.37, 44.67,
    107.07, 100.90, 94.45, 86.94, 130.04, 120.84, 112.80, 106.23, 137.58, 132.86,
    121.42, 117.42, 145.27, 140.20, 129.54, 121.22, 156.88, 148.75, 138.86, 128.10,
    57.72, 54.43, 50.94, 46.89, 114.48, 106.05, 99.45, 92.63, 136.51, 130.48,
    119.68, 115.62, 147.97, 143.82, 132.10, 125.03, 157.68, 147.63, 138.52, 127.40,
    168.49, 156.15, 146.65, 135.91, 60.56, 56.10, 52.62, 48.99, 117.95, 111.44,
    102.81, 98.72, 142.82, 139.14, 127.26, 121.74, 157.94, 149.45, 139.65, 128.71,
    164.50, 152.60, 142.72, 133.86, 173.91, 163.34, 151.23, 144.50, 61.66, 58.23,
    53.73, 51.58, 120.98, 117.53, 107.31, 103.46, 150.46, 144.00, 133.76, 124.14,
    164.16, 152.09, 142.78, 132.53, 167.33, 159.28, 146.37, 141.18, 177.76, 172.08,
    157.18, 151.90, 62.72, 60.92, 55.63, 53.64, 125.85, 121.65, 112.27, 105.26,
    156.31, 145.39, 136.62, 125.92, 165.99, 156.20, 144.44, 138.26, 171.11, 166.64,
    152.27, 146.13, 184.25, 178.79, 164.48, 155.15, 64.88, 62.73, 57.88, 54.29,
    130.72, 122.59, 114.97, 105.74, 158.02, 147.31, 137.12, 129.85, 167.58, 162.45,
    148.35, 143.27, 177.64, 170.65, 158.16, 147.28, 191.66, 180.76, 169.15, 155.72,
    70.25, 67.06, 61.55, 59.43, 138.85, 135.28, 123.71, 118.40, 173.34, 164.12,
    153.32, 141.35, 187.30, 173.72, 162.51, 152.33, 190.88, 183.61, 168.00, 162.50,
    203.70, 198.25, 181.08, 174.11, 76.42, 72.17, 66.60, 63.93, 149.94, 145.67,
    133.01, 128.23, 186.49, 178.47, 165.79, 153.86, 203.46, 188.50, 176.96, 164.26,
    207.39, 197.42, 181.42, 174.98, 220.32, 213.29, 194.82, 188.27, 79.67, 73.94,
    69.48, 64.18, 155.77, 145.74, 135.29, 128.74, 187.04, 181.78, 165.98, 159.95,
    206.15, 197.13, 183.21, 169.92, 216.77, 200.81, 188.48, 175.07, 229.67, 213.93,
    199.27, 188.47, 49.62, 47.23, 44.01, 40.69, 99.08, 91.91, 86.36, 79.85,
    118.42, 112.09, 103.30, 99.33, 127.23, 123.95, 113.43, 108.33, 135.73, 128.18,
    119.88, 110.41, 145.62, 135.46, 127.29, 117.31, 59.50, 55.21, 51.87, 47.95,
    116.29, 108.90, 101.02, 96.23, 139.73, 135.86, 124.06, 119.48, 154.09, 147.20,
    136.88, 126.85, 161.88, 149.95, 140.71, 130.81, 171.46, 159.82, 148.78, 140.87,
    64.94, 60.79, 56.41, 53.71, 126.78, 122.42, 111.89, 108.20, 156.68, 151.22,
    139.72, 130.75, 172.18, 159.99, 150.34, 138.69, 176.15, 166.07, 153.40, 147.06,
    186.54, 179.20, 164.04, 158.65, 68.37, 66.00, 60.32, 58.34, 136.35, 132.53,
    121.73, 115.22, 170.07, 159.24, 149.42, 137.42, 181.83, 169.73, 157.82, 149.74,
    186.18, 180.67, 164.97, 159.21, 199.75, 194.52, 178.21, 169.68, 72.10, 70.09,
    64.36, 60.95, 145.54, 137.72, 128.69, 118.61, 177.44, 164.60, 153.95, 144.38,
    187.51, 180.46, 165.10, 159.69, 197.33, 191.02, 176.09, 165.45, 213.18, 202.97,
    189.08, 174.84, 76.04, 72.00, 67.26, 62.00, 151.27, 140.15, 131.58, 122.12,
    180.49, 171.79, 157.88, 152.27, 194.89, 189.70, 173.92, 165.28, 207.86, 195.31,
    183.04, 168.37, 222.50, 206.46, 193.99, 179.29, 78.44, 72.68, 68.24, 63.31,
    152.97, 143.94, 133.11, 127.40, 184.56, 179.73, 164.23, 157.62, 203.94, 193.77,
    180.70, 166.88, 213.21, 197.58, 185.09, 172.90, 225.56, 211.09, 195.91, 186.48,
    78.90, 74.21, 68.65, 65.68, 154.43, 149.69, 136.70, 132.02, 191.59, 184.07,
    170.59, 158.86, 209.74, 194.48, 182.70, 169.07, 214.05, 202.89, 186.85, 179.81,
    227.05, 219.12, 200.29, 193.72, 87.45, 81.96, 76.88, 70.70, 172.61, 160.08,
    149.76, 140.37, 205.89, 198.03, 181.20, 175.27, 224.52, 217.44, 200.38, 188.39,
    238.61, 222.31, 208.85, 192.30, 254.22, 235.50, 220.82, 205.77, 94.25, 89.23,
    83.36, 76.85, 187.49, 173.71, 163.08, 151.36, 223.70, 212.93, 195.68, 188.73,
    241.55, 235.12, 215.57, 204.85, 257.63, 242.07, 226.86, 208.68, 275.78, 255.89,
    240.44, 222.21, 94.20, 91.78, 83.94, 80.28, 189.96, 181.66, 168.83, 156.59,
    233.81, 216.60, 203.31, 188.83, 247.07, 235.38, 216.22, 208.62, 257.51, 250.59,
    229.83, 218.23, 278.07, 267.44, 247.69, 230.90, 50.59, 47.37, 44.44, 40.87,
    99.77, 92.57, 86.55, 81.22, 119.03, 114.62, 104.84, 101.41, 129.94, 125.74,
    115.95, 108.88, 138.01, 128.48, 120.72, 111.20, 146.96, 136.16, 127.62, 119.05,
    59.93, 55.59, 51.99, 48.77, 116.61, 111.06, 102.04, 98.43, 142.22, 138.41,
    126.93, 120.56, 157.26, 147.69, 138.44, 127.33, 162.63, 151.45, 141.10, 133.41,
    171.86, 162.66, 149.92, 144.13, 65.12, 61.99, 56.97, 54.94, 128.45, 125.10,
    114.33, 109.67, 160.25, 152.17, 141.96, 131.06, 173.62, 160.91, 150.71, 140.86,
    176.87, 169.69, 155.41, 150.28, 188.52, 183.28, 167.36, 161.20, 69.26, 67.45,
    61.63, 59.15, 139.47, 133.93, 124.16, 115.57, 172.28, 159.73, 150.04, 138.90,
    182.27, 172.87, 159.15, 153.21, 189.20, 184.29, 168.75, 160.89, 204.15, 197.06,
    182.06, 170.40, 73.75, 70.85, 65.66, 61.14, 148.09, 138.04, 129.68, 119.38,
    177.94, 166.90, 154.66, 147.58, 189.66, 184.53, 168.53, 162.13, 201.88, 192.49,
    179.18, 165.83, 217.36, 203.54, 190.98, 175.64, 77.39, 72.16, 67.79, 62.39,
    152.06, 141.44, 131.91, 124.47, 181.74, 175.75, 160.57, 155.23, 199.25, 192.01,
    177.60, 165.90, 210.91, 195.80, 184.00, 169.91, 224.11, 207.88, 194.44, 182.33,
    78.87, 73.34, 68.41, 64.52, 153.53, 147.01, 134.74, 130.24, 188.19, 182.76,
    168.00, 158.72, 207.80, 194.27, 182.37, 167.74, 213.95, 200.00, 185.77, 176.59,
    226.16, 215.23, 197.82, 190.77, 79.18, 75.78, 69.48, 67.14, 156.81, 152.77,
    139.80, 133.52, 195.81, 184.94, 172.95, 159.30, 211.10, 195.96, 183.12, 172.07,
    215.25, 207.49, 189.73, 183.52, 229.97, 223.95, 204.63, 196.41, 88.63, 82.19,
    77.22, 71.43, 173.11, 162.28, 150.43, 143.46, 208.19, 202.52, 184.95, 177.99,
    229.71, 219.16, 203.94, 188.83, 241.05, 223.29, 209.46, 194.93, 255.25, 238.12,
    221.52, 210.01, 95.92, 89.44, 84.01, 77.33, 188.47, 175.31, 163.49, 154.27,
    225.26, 217.84, 199.02, 192.40, 246.97, 237.99, 220.13, 205.62, 261.41, 242.68,
    228.05, 210.59, 277.76, 257.65, 240.99, 225.99, 96.17, 93.16, 85.83, 80.73,
    193.93, 182.31, 170.82, 157.14, 234.98, 218.67, 203.84, 192.51, 248.86, 240.81,
    219.98, 212.62, 263.31, 253.56, 234.64, 219.01, 284.25, 268.79, 251.24, 231.50,
    42.70, 39.59, 37.19, 34.43, 83.35, 78.22, 72.46, 69.18, 100.34, 97.65,
    89.18, 85.77, 110.77, 105.55, 98.29, 90.93, 116.11, 107.56, 100.86, 93.97,
    122.91, 114.76, 106.69, 101.27, 50.07, 46.97, 43.52, 41.53, 97.86, 94.67,
    86.48, 83.60, 121.16, 116.70, 107.98, 100.81, 132.92, 123.37, 115.93, 107.09,
    135.82, 128.36, 118.40, 113.72, 143.93, 138.57, 126.76, 122.61, 54.64, 52.84,
    48.27, 46.67, 109.15, 105.97, 97.44, 92.00, 136.03, 127.11, 119.34, 109.78,
    145.15, 135.75, 126.05, 119.88, 148.85, 144.63, 132.06, 127.29, 159.86, 155.59,
    142.67, 135.53, 58.84, 57.14, 52.53, 49.62, 118.75, 112.10, 104.86, 96.56,
    144.45, 134.13, 125.31, 117.81, 152.74, 147.31, 134.68, 130.27, 161.07, 155.65,
    143.68, 134.67, 173.98, 165.24, 154.13, 142.31, 62.80, 59.31, 55.46, 51.08,
    124.69, 115.51, 108.37, 100.79, 148.71, 141.90, 130.26, 125.76, 160.95, 156.54,
    143.67, 136.20, 171.58, 160.87, 150.88, 138.76, 183.47, 170.11, 159.79, 147.92,
    65.18, 60.38, 56.65, 52.67, 126.99, 119.79, 110.62, 106.08, 153.54, 149.58,
    136.75, 130.99, 169.77, 160.90, 150.23, 138.57, 177.08, 164.19, 153.66, 143.89,
    187.25, 175.62, 162.75, 155.28, 65.87, 62.10, 57.36, 54.99, 129.10, 125.31,
    114.42, 110.40, 160.41, 153.76, 142.70, 132.61, 175.26, 162.41, 152.52, 141.39,
    178.72, 169.83, 156.20, 150.53, 189.74, 183.46, 167.62, 162.05, 66.57, 64.60,
    58.99, 56.93, 133.44, 129.13, 119.07, 111.82, 165.89, 154.45, 145.11, 133.67,
    176.34, 165.69, 153.37, 146.59, 181.54, 176.74, 161.45, 155.12, 195.37, 189.75,
    174.42, 164.80, 74.34, 68.99, 64.49, 60.56, 144.66, 137.95, 126.66, 122.26,
    176.63, 171.83, 157.66, 149.56, 195.27, 183.18, 171.77, 157.98, 201.72, 188.01,
    175.03, 165.70, 213.17, 202.02, 186.07, 179.02, 80.78, 74.83, 70.22, 65.28,
    157.40, 148.47, 137.10, 131.49, 190.31, 185.40, 169.50, 162.36, 210.42, 199.42,
    186.21, 171.74, 219.48, 203.50, 190.45, 178.35, 232.08, 217.67, 201.72, 192.46,
    81.98, 78.25, 72.80, 67.42, 163.99, 152.28, 143.10, 132.10, 196.23, 185.25,
    170.99, 164.09, 210.33, 204.91, 187.37, 179.36, 224.32, 212.42, 198.42, 182.94,
    240.93, 224.47, 210.89, 194.17, 48.81, 47.54, 43.53, 41.50, 98.49, 93.86,
    87.40, 80.86, 120.86, 111.95, 104.98, 97.80, 127.65, 122.04, 111.93, 108.14,
    133.49, 129.73, 119.17, 112.76, 144.20, 138.24, 128.29, 119.23, 59.13, 56.38,
    52.48, 48.57, 118.20, 109.71, 103.10, 95.23, 141.37, 133.60, 123.24, 118.36,
    151.67, 147.77, 135.16, 129.26, 161.78, 153.03, 143.02, 131.80, 173.69, 161.72,
    151.94, 139.95, 66.00, 61.27, 57.58, 53.17, 129.08, 120.71, 112.09, 106.60,
    154.93, 150.53, 137.45, 132.49, 170.71, 163.33, 151.75, 140.80, 179.59, 166.38,
    156.19, 145.00, 190.31, 177.20, 165.11, 156.07, 69.63, 65.09, 60.45, 57.47,
    135.83, 130.99, 119.76, 115.84, 167.65, 162.01, 149.55, 140.17, 184.42, 171.50,
    161.16, 148.56, 188.84, 177.76, 164.35, 157.35, 199.90, 191.74, 175.62, 169.81,
    71.85, 69.26, 63.33, 61.26, 143.12, 139.20, 127.75, 121.12, 178.59, 167.45,
    157.04, 144.43, 191.19, 178.26, 165.91, 157.16, 195.58, 189.62, 173.16, 167.21,
    209.69, 204.26, 187.02, 178.35, 74.78, 72.74, 66.75, 63.31, 150.96, 143.08,
    133.60, 123.22, 184.32, 170.90, 159.95, 149.76, 194.73, 187.13, 171.29, 165.67,
    204.63, 198.30, 182.64, 171.89, 221.08, 210.84, 196.25, 181.65, 78.25, 74.21,
    69.27, 63.91, 155.85, 144.43, 135.63, 125.73, 186.02, 176.76, 162.58, 156.67,
    200.55, 195.29, 178.94, 170.32, 213.94, 201.33, 188.57, 173.50, 229.18, 212.79,
    199.96, 184.63, 80.37, 74.49, 69.96, 64.83, 156.82, 147.34, 136.38, 130.35,
    188.96, 183.95, 168.04, 161.46, 208.69, 198.61, 185.07, 171.08, 218.51, 202.44,
    189.75, 176.99, 231.24, 216.12, 200.77, 190.81, 86.17, 83.34, 76.88, 72.14,
    173.64, 162.90, 152.75, 140.48, 209.97, 195.68, 182.19, 172.46, 222.63, 215.75,
    197.03, 190.32, 235.93, 226.73, 210.09, 195.69, 254.58, 240.19, 224.73, 206.91,
    92.68, 90.16, 82.73, 78.47, 187.11, 177.34, 165.58, 152.73, 228.45, 211.82,
    198.24, 185.63, 241.35, 231.95, 212.30, 205.34, 253.63, 245.78, 226.38, 213.04,
    274.02, 261.32, 243.24, 225.14, 94.63, 90.33, 82.90, 80.05, 187.03, 182.21,
    166.61, 159.50, 233.47, 221.10, 206.52, 190.42, 252.33, 234.01, 218.94, 205.17,
    257.13, 247.29, 226.29, 218.88, 274.39, 267.02, 243.89, 234.53, 49.77, 48.09,
    44.39, 41.61, 100.24, 93.94, 88.12, 81.04, 121.09, 112.95, 105.09, 99.60,
    128.48, 124.60, 113.78, 109.85, 136.26, 130.80, 121.29, 112.86, 146.99, 138.52,
    129.67, 119.35, 60.19, 56.43, 52.93, 48.68, 118.84, 110.20, 103.12, 96.61,
    141.74, 136.28, 124.72, 120.63, 154.52, 149.68, 137.91, 129.71, 164.25, 153.07,
    143.79, 132.39, 175.03, 162.13, 152.04, 141.63, 66.36, 61.53, 57.59, 53.93,
    129.14, 122.79, 112.90, 108.83, 157.26, 153.11, 140.32, 133.49, 173.93, 163.59,
    153.25, 140.99, 180.13, 167.58, 156.26, 147.49, 190.35, 179.86, 165.92, 159.33,
    69.66, 66.19, 60.88, 58.67, 137.23, 133.62, 122.07, 117.24, 171.13, 162.78,
    151.72, 140.20, 185.69, 172.05, 161.23, 150.47, 189.15, 181.18, 166.04, 160.50,
    201.46, 195.73, 178.72, 172.29, 72.58, 70.65, 64.54, 62.01, 146.06, 140.46,
    130.10, 121.26, 180.65, 167.56, 157.43, 145.59, 191.24, 181.07, 166.85, 160.45,
    198.21, 193.10, 176.72, 168.74, 213.80, 206.63, 190.72, 178.80, 76.31, 73.42,
    67.98, 63.39, 153.37, 143.13, 134.42, 123.69, 184.49, 172.80, 160.28, 152.71,
    196.41, 190.99, 174.41, 167.95, 208.92, 199.52, 185.57, 171.94, 225.06, 211.04,
    197.92, 182.03, 79.52, 74.23, 69.71, 64.14, 156.41, 145.36, 135.67, 127.80,
    186.82, 180.44, 164.90, 159.46, 204.56, 197.39, 182.40, 170.66, 216.77, 201.39,
    189.26, 174.61, 230.48, 213.69, 200.01, 187.24, 80.67, 74.95, 69.98, 65.88,
    157.01, 150.10, 137.67, 133.01, 192.17, 186.76, 171.55, 162.34, 212.31, 198.74,
    186.49, 171.52, 218.87, 204.35, 189.98, 180.30, 231.33, 219.78, 202.16, 194.80,
    87.97, 83.77, 78.03, 72.16, 175.69, 163.00, 153.15, 141.57, 210.01, 198.72,
    183.18, 176.08, 225.56, 219.75, 201.07, 192.10, 240.62, 227.34, 212.58, 195.81,
    258.21, 240.23, 225.74, 208.02, 94.59, 91.00, 84.26, 78.57, 190.10, 177.39,
    166.60, 153.30, 228.66, 214.18, 198.66, 189.29, 243.44, 236.73, 216.17, 208.16,
    258.95, 247.29, 230.00, 213.10, 278.95, 261.57, 245.31, 225.61, 95.18, 92.22,
    84.22, 81.36, 190.49, 184.66, 170.03, 160.11, 237.13, 221.16, 207.73, 191.19,
    252.53, 236.70, 219.44, 209.25, 259.45, 252.37, 230.47, 221.82, 278.93, 271.23,
    249.00, 235.91, 43.54, 41.41, 38.60, 35.67, 86.88, 80.58, 75.70, 70.03,
    103.81, 98.35, 90.60, 87.15, 111.62, 108.74, 99.53, 94.99, 119.08, 112.37,
    105.13, 96.80, 127.72, 118.75, 111.59, 102.88, 52.18, 48.40, 45.47, 42.05,
    101.94, 95.53, 88.57, 84.44, 122.56, 119.20, 108.86, 104.79, 135.20, 129.05,
    120.06, 111.20, 141.93, 131.48, 123.34, 114.75, 150.31, 140.18, 130.44, 123.61,
    56.93, 53.33, 49.46, 47.13, 111.17, 107.42, 98.16, 94.92, 137.48, 132.60,
    122.58, 114.62, 151.00, 140.25, 131.80, 121.64, 154.41, 145.70, 134.52, 129.04,
    163.56, 157.24, 143.90, 139.19, 59.95, 57.91, 52.92, 51.18, 119.64, 116.24,
    106.81, 101.01, 149.19, 139.59, 131.00, 120.49, 159.39, 148.88, 138.37, 131.39,
    163.28, 158.53, 144.75, 139.64, 175.25, 170.63, 156.37, 148.78, 63.26, 61.48,
    56.47, 53.44, 127.69, 120.73, 112.86, 103.98, 155.56, 144.35, 134.95, 126.67,
    164.42, 158.35, 144.83, 140.10, 173.15, 167.51, 154.50, 145.04, 187.05, 177.94,
    165.84, 153.26, 66.72, 63.11, 58.98, 54.36, 132.64, 122.88, 115.34, 107.12,
    158.23, 150.74, 138.47, 133.60, 170.99, 166.40, 152.61, 144.91, 182.35, 171.21,
    160.49, 147.62, 195.12, 181.00, 170.06, 157.25, 68.78, 63.72, 59.82, 55.54,
    134.09, 126.28, 116.72, 111.79, 161.90, 157.69, 144.11, 138.22, 178.93, 169.87,
    158.48, 146.30, 186.93, 173.25, 162.25, 151.69, 197.72, 185.17, 171.77, 163.63,
    69.16, 65.10, 60.19, 57.63, 135.43, 131.34, 119.94, 115.80, 168.12, 161.40,
    149.65, 139.25, 183.92, 170.50, 160.16, 148.29, 187.64, 178.02, 163.87, 157.77,
    199.10, 192.27, 175.72, 169.93, 76.71, 71.84, 67.41, 61.99, 151.32, 140.38,
    131.28, 123.15, 180.53, 173.77, 158.96, 153.76, 197.01, 190.69, 175.80, 165.15,
    209.28, 194.88, 183.10, 168.64, 222.89, 206.50, 193.57, 180.51, 82.70, 78.22,
    73.11, 67.37, 164.40, 152.30, 142.95, 132.77, 196.11, 186.83, 171.63, 165.59,
    211.93, 206.24, 189.16, 179.61, 226.01, 212.19, 198.92, 182.96, 241.84, 224.33,
    210.77, 194.90, 82.64, 80.51, 73.66, 70.40, 166.68, 159.27, 148.09, 137.26,
    205.01, 189.91, 178.22, 165.64, 216.61, 206.53, 189.65, 183.04, 225.93, 219.80,
    201.67, 191.33, 244.00, 234.50, 217.28, 202.40, 48.87, 46.81, 42.90, 41.47,
    96.84, 94.34, 86.35, 82.41, 120.93, 114.12, 106.76, 98.31, 130.27, 120.97,
    113.00, 106.27, 132.86, 128.16, 117.17, 113.32, 142.00, 138.31, 126.39, 121.24,
    58.14, 56.65, 51.84, 49.50, 117.30, 111.97, 104.17, 96.48, 144.14, 133.52,
    125.27, 116.53, 152.27, 145.34, 133.40, 128.81, 158.99, 154.62, 141.92, 134.51,
    171.72, 164.88, 152.86, 142.27, 65.47, 62.53, 58.15, 53.88, 131.01, 121.69,
    114.36, 105.54, 156.82, 147.96, 136.61, 131.04, 168.00, 163.66, 149.63, 143.31,
    179.15, 169.75, 158.52, 146.19, 192.46, 179.39, 168.52, 155.14, 70.65, 65.64,
    61.68, 56.91, 138.30, 129.17, 120.06, 114.00, 165.82, 160.98, 146.99, 141.81,
    182.55, 174.94, 162.38, 150.86, 192.31, 178.21, 167.34, 155.17, 203.90, 189.67,
    176.88, 166.91, 73.17, 68.31, 63.51, 60.27, 142.66, 137.38, 125.66, 121.55,
    175.83, 170.12, 156.89, 147.30, 193.60, 180.22, 169.33, 155.99, 198.45, 186.51,
    172.61, 165.03, 209.99, 201.10, 184.31, 178.15, 74.56, 71.78, 65.66, 63.51,
    148.35, 144.37, 132.40, 125.73, 185.18, 173.88, 162.99, 149.91, 198.53, 184.90,
    172.24, 162.88, 202.91, 196.52, 179.49, 173.42, 217.39, 211.80, 193.81, 185.10,
    76.90, 74.85, 68.63, 65.21, 155.24, 147.39, 137.50, 126.94, 189.84, 175.95,
    164.78, 154.04, 200.52, 192.41, 176.21, 170.40, 210.41, 204.10, 187.83, 177.06,
    227.33, 217.16, 201.94, 187.14, 80.03, 76.02, 70.91, 65.47, 159.57, 147.94,
    138.96, 128.66, 190.57, 180.78, 166.42, 160.22, 205.14, 199.82, 182.97, 174.42,
    218.86, 206.27, 193.08, 177.72, 234.61, 217.99, 204.85, 188.98, 85.29, 82.75,
    75.56, 72.93, 170.92, 165.45, 152.53, 143.29, 212.53, 197.91, 185.95, 171.26,
    225.98, 212.25, 196.51, 187.77, 232.57, 226.39, 206.80, 198.75, 250.25, 243.09,
    223.41, 211.18, 92.42, 88.97, 81.38, 78.72, 183.87, 178.94, 164.11, 155.84,
    229.52, 215.50, 202.02, 185.81, 246.06, 229.17, 213.48, 201.89, 251.49, 243.58,
    222.47, 214.95, 269.45, 262.51, 240.23, 229.42, 96.58, 89.63, 83.79, 78.67,
    187.94, 179.18, 164.54, 158.81, 229.44, 223.22, 204.79, 194.31, 253.66, 238.00,
    223.16, 205.24, 262.09, 244.23, 227.41, 215.23, 276.96, 262.41, 241.72, 232.54,
    49.15, 47.72, 43.57, 42.03, 98.57, 95.33, 87.94, 82.52, 122.48, 113.97,
    107.09, 98.68, 130.13, 122.36, 113.20, 108.28, 134.05, 130.53, 119.26, 114.51,
    144.30, 140.09, 128.83, 121.62, 59.17, 57.25, 52.80, 49.57, 119.26, 111.93,
    104.94, 96.52, 144.27, 134.41, 125.17, 118.44, 152.93, 148.17, 135.32, 130.72,
    162.02, 155.77, 144.30, 134.46, 174.84, 165.03, 154.38, 142.16, 66.58, 62.51,
    58.60, 53.89, 131.60, 121.98, 114.22, 106.83, 156.93, 150.66, 137.95, 133.41,
    170.82, 165.64, 152.48, 143.66, 181.72, 169.54, 159.23, 146.54, 193.78, 179.50,
    168.41, 156.65, 70.98, 65.79, 61.61, 57.60, 138.14, 131.12, 120.67, 116.21,
    167.96, 163.58, 149.83, 142.75, 185.79, 175.01, 163.85, 150.79, 192.69, 179.11,
    167.15, 157.50, 203.64, 192.10, 177.38, 170.13, 73.08, 69.33, 63.82, 61.45,
    143.82, 139.96, 127.84, 122.92, 179.24, 170.77, 159.03, 147.11, 194.77, 180.43,
    169.18, 157.65, 198.41, 189.74, 174.01, 168.13, 211.17, 204.99, 187.18, 180.59,
    75.15, 73.13, 66.79, 64.24, 151.14, 145.56, 134.69, 125.73, 187.16, 173.70,
    163.22, 150.79, 198.27, 187.42, 172.85, 166.04, 205.19, 199.91, 182.87, 174.86,
    221.24, 214.07, 197.41, 185.37, 78.34, 75.48, 69.82, 65.21, 157.58, 147.23,
    138.23, 127.16, 189.78, 177.52, 164.81, 156.78, 201.82, 196.11, 179.07, 172.59,
    214.50, 205.18, 190.66, 176.87, 231.17, 217.10, 203.50, 187.17, 81.25, 75.94,
    71.29, 65.58, 159.99, 148.57, 138.79, 130.51, 190.99, 184.23, 168.42, 162.90,
    208.86, 201.80, 186.30, 174.58, 221.55, 206.01, 193.59, 178.47, 235.72, 218.46,
    204.61, 191.25, 86.35, 84.11, 77.01, 73.45, 174.24, 166.11, 154.64, 143.11,
    213.87, 198.12, 185.80, 173.03, 225.91, 215.89, 198.04, 191.31, 236.14, 229.53,
    210.81, 199.55, 255.08, 244.64, 226.97, 211.01, 93.15, 90.64, 82.78, 79.62,
    187.34, 180.41, 166.94, 155.83, 231.97, 215.29, 202.30, 186.89, 245.73, 232.30,
    214.24, 205.80, 254.33, 247.79, 226.66, 216.72, 274.22, 265.33, 244.69, 229.75,
    96.49, 90.60, 83.90, 80.14, 188.67, 182.66, 166.84, 161.23, 233.78, 224.98,
    208.28, 194.28, 256.28, 237.78, 223.42, 206.51, 261.75, 247.64, 228.29, 219.41,
    277.47, 267.38, 244.51, 236.51, 43.56, 42.42, 38.85, 37.02, 87.91, 83.70,
    77.97, 72.10, 107.78, 99.85, 93.61, 87.27, 113.84, 108.93, 99.87, 96.51,
    119.14, 115.74, 106.36, 100.55, 128.70, 123.29, 114.47, 106.31, 52.78, 50.28,
    46.82, 43.31, 105.44, 97.84, 91.93, 84.96, 126.06, 119.23, 109.93, 105.64,
    135.34, 131.86, 120.63, 115.29, 144.37, 136.46, 127.58, 117.53, 154.95, 144.20,
    135.50, 124.84, 58.87, 54.64, 51.34, 47.43, 115.09, 107.71, 99.96, 95.15,
    138.22, 134.34, 122.67, 118.20, 152.36, 145.66, 135.39, 125.55, 160.17, 148.38,
    139.26, 129.38, 169.70, 158.09, 147.24, 139.29, 62.08, 58.07, 53.92, 51.29,
    121.15, 116.92, 106.87, 103.36, 149.63, 144.51, 133.46, 124.99, 164.52, 152.93,
    143.71, 132.52, 168.39, 158.63, 146.59, 140.44, 178.28, 171.13, 156.71, 151.54,
    64.08, 61.82, 56.51, 54.66, 127.73, 124.19, 114.02, 108.01, 159.35, 149.30,
    140.06, 128.81, 170.48, 159.04, 147.95, 140.27, 174.47, 169.24, 154.54, 149.19,
    187.13, 182.26, 166.92, 159.06, 66.74, 64.90, 59.57, 56.46, 134.72, 127.59,
    119.17, 109.88, 164.37, 152.44, 142.62, 133.65, 173.68, 167.03, 152.84, 147.84,
    182.64, 176.89, 163.00, 153.27, 197.32, 188.02, 175.08, 161.98, 69.84, 66.17,
    61.79, 56.99, 139.01, 128.80, 120.94, 112.18, 165.88, 157.76, 145.04, 139.83,
    178.98, 174.25, 159.71, 151.89, 190.91, 179.52, 168.19, 154.73, 204.44, 189.75,
    178.30, 164.71, 71.69, 66.43, 62.38, 57.84, 139.83, 131.48, 121.64, 116.35,
    168.60, 164.16, 149.98, 144.03, 186.25, 177.11, 165.10, 152.55, 194.87, 180.56,
    169.19, 157.93, 206.18, 192.84, 179.05, 170.30, 76.91, 74.34, 68.61, 64.33,
    154.94, 145.25, 136.23, 125.29, 187.23, 174.58, 162.47, 153.93, 198.60, 192.56,
    175.85, 169.80, 210.58, 202.22, 187.46, 174.49, 227.18, 214.17, 200.45, 184.51,
    82.72, 80.44, 73.84, 69.98, 166.98, 158.13, 147.71, 136.19, 203.72, 188.94,
    176.77, 165.66, 215.26, 207.02, 189.44, 183.24, 226.38, 219.25, 202.03, 189.97,
    244.57, 233.04, 217.01, 200.75, 84.39, 80.62, 73.97, 71.44, 166.89, 162.60,
    148.71, 142.26, 208.36, 197.16, 184.23, 169.80, 225.01, 208.74, 195.22, 183.10,
    229.34, 220.72, 201.93, 195.32, 244.81, 238.30, 217.68, 209.21, 49.84, 46.33,
    43.23, 40.74, 97.01, 92.82, 85.10, 82.24, 118.82, 115.44, 106.08, 100.30,
    131.24, 122.77, 115.23, 105.98, 135.21, 126.32, 117.38, 111.49, 142.92, 135.90,
    124.95, 120.45, 58.27, 55.72, 51.10, 49.38, 115.32, 112.36, 102.79, 98.25,
    144.00, 136.11, 127.25, 117.23, 155.35, 144.17, 134.77, 126.54, 158.38, 152.57,
    139.53, 134.97, 169.15, 164.69, 150.46, 144.50, 64.38, 62.72, 57.37, 54.86,
    129.83, 124.13, 115.37, 106.99, 159.76, 148.00, 138.91, 129.04, 168.82, 160.86,
    147.76, 142.58, 175.99, 171.25, 157.08, 149.12, 190.05, 182.75, 169.27, 157.76,
    69.99, 66.95, 62.21, 57.71, 140.19, 130.32, 122.47, 112.93, 167.96, 158.21,
    146.21, 140.07, 179.67, 175.01, 159.95, 153.38, 191.54, 181.79, 169.62, 156.56,
    205.90, 192.13, 180.44, 166.04, 74.15, 68.95, 64.79, 59.73, 145.28, 135.53,
    126.08, 119.52, 174.02, 168.79, 154.13, 148.80, 191.39, 183.69, 170.35, 158.48,
    201.89, 187.15, 175.79, 162.80, 214.17, 199.05, 185.78, 175.02, 75.95, 70.82,
    65.91, 62.44, 148.00, 142.32, 130.24, 125.97, 182.16, 176.44, 162.57, 152.88,
    200.75, 187.06, 175.73, 161.80, 205.99, 193.31, 179.07, 170.96, 217.90, 208.33,
    191.07, 184.60, 76.75, 73.77, 67.52, 65.30, 152.51, 148.48, 136.09, 129.44,
    190.42, 179.06, 167.76, 154.33, 204.44, 190.21, 177.35, 167.43, 208.79, 201.99,
    184.52, 178.37, 223.53, 217.79, 199.20, 190.51, 78.62, 76.56, 70.15, 66.76,
    158.71, 150.93, 140.69, 130.00, 194.37, 180.09, 168.76, 157.52, 205.29, 196.67,
    180.23, 174.22, 215.09, 208.83, 192.02, 181.31, 232.38, 222.34, 206.57, 191.66,
    86.44, 81.34, 75.22, 71.99, 169.23, 164.08, 149.84, 144.69, 210.02, 201.70,
    186.97, 174.05, 229.83, 213.09, 200.17, 185.29, 234.52, 222.40, 204.76, 197.10,
    248.80, 240.20, 219.54, 212.32, 94.13, 87.78, 81.68, 77.40, 183.43, 176.40,
    161.42, 156.14, 225.78, 218.68, 201.50, 189.49, 248.81, 231.84, 217.80, 200.54,
    255.31, 239.60, 221.95, 211.90, 270.07, 258.22, 236.83, 228.81, 97.19, 91.04,
    85.41, 78.55, 191.75, 177.87, 166.36, 156.02, 228.75, 220.14, 201.40, 194.81,
    249.58, 241.61, 222.73, 209.27, 265.16, 246.95, 232.01, 213.67, 282.44, 261.65,
    245.29, 228.69, 49.72, 46.84, 43.29, 41.47, 97.41, 94.51, 86.30, 83.30,
    120.98, 116.05, 107.66, 100.11, 132.26, 122.59, 115.14, 106.67, 134.90, 128.09,
    117.86, 113.53, 143.18, 138.36, 126.43, 122.25, 58.50, 56.74, 51.81, 50.02,
    117.21, 113.48, 104.60, 98.31, 145.77, 135.78, 127.57, 117.47, 155.03, 145.56,
    134.80, 128.75, 159.51, 155.25, 141.81, 136.32, 171.61, 166.73, 153.20, 144.88,
    65.42, 63.36, 58.38, 54.90, 131.91, 123.98, 116.17, 106.87, 159.79, 148.72,
    138.62, 130.94, 169.25, 163.80, 149.63, 144.61, 179.11, 172.44, 159.60, 148.94,
    193.34, 182.79, 170.87, 157.43, 71.12, 66.87, 62.65, 57.64, 140.75, 130.42,
    122.19, 114.11, 167.82, 160.86, 147.38, 142.49, 182.40, 177.04, 162.84, 153.67,
    194.18, 181.38, 170.30, 156.67, 207.21, 191.96, 180.18, 167.36, 74.46, 68.99,
    64.65, 60.34, 144.93, 137.34, 126.50, 121.71, 175.95, 171.41, 156.90, 149.72,
    194.63, 183.63, 171.81, 158.19, 202.17, 187.77, 175.37, 164.97, 213.67, 201.24,
    186.00, 178.16, 75.76, 71.76, 66.11, 63.59, 148.93, 144.86, 132.29, 127.34,
    185.49, 177.01, 164.70, 152.52, 201.86, 186.99, 175.42, 163.22, 205.66, 196.35,
    180.20, 174.01, 218.74, 212.14, 193.72, 187.03, 77.22, 75.09, 68.57, 66.02,
    155.17, 149.64, 138.34, 129.34, 192.36, 178.66, 167.89, 154.96, 203.94, 192.47,
    177.68, 170.47, 210.76, 205.33, 187.74, 179.76, 227.14, 220.03, 202.72, 190.67,
    79.99, 77.17, 71.32, 66.71, 161.00, 150.62, 141.36, 130.02, 194.15, 181.37,
    168.55, 160.08, 206.25, 200.26, 182.85, 176.38, 219.01, 209.83, 194.80, 180.94,
    236.14, 222.10, 208.06, 191.42, 86.35, 82.68, 75.78, 73.25, 171.06, 166.66,
    152.52, 145.62, 213.61, 201.67, 188.63, 173.71, 230.20, 213.73, 199.69, 187.72,
    234.75, 226.38, 206.97, 200.19, 250.86, 244.31, 223.25, 214.22, 93.90, 88.94,
    81.94, 78.81, 184.59, 179.55, 163.97, 157.83, 229.91, 219.39, 204.14, 189.04,
    250.19, 231.76, 217.41, 202.30, 254.90, 243.37, 223.34, 215.68, 271.11, 262.94,
    240.11, 231.81, 98.01, 90.88, 85.38, 79.01, 191.38, 179.51, 166.34, 158.72,
    230.27, 224.05, 204.62, 196.85, 254.14, 242.32, 225.57, 208.77, 266.54, 246.91,
    231.57, 215.63, 282.20, 263.38, 244.93, 232.34,
];
