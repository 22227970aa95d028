//! Filter Coefficient Tables
//!
//! Fixed coefficient data for the filter bank, designed for the
//! 31.25 kHz sample rate. Every FIR table is symmetric (linear phase).

/// All-pass cascade for the I branch (poles near 84 Hz, 607 Hz and 2539 Hz)
pub const ALLPASS_PLUS_K: [f32; 3] = [0.98325, 0.88497, 0.59331];

/// All-pass cascade for the Q branch (poles near 8628 Hz, 1200 Hz and 287 Hz)
///
/// Lags [`ALLPASS_PLUS_K`] by 90 degrees (within 1 degree) from 300 Hz to 3 kHz.
pub const ALLPASS_MINUS_K: [f32; 3] = [0.07102, 0.78470, 0.94391];

/// 2600 Hz low-pass, 60 dB stopband, 255 taps
///
/// Voice receive selectivity and transmit pre-phasing shaping.
pub const LPF_2600_TAPS: [f32; 255] = [
    -0.000021, 0.000006, 0.000039, 0.000067, 0.000082, 0.000074, 0.000041, -0.000011,
    -0.000071, -0.000122, -0.000145, -0.000129, -0.000071, 0.000018, 0.000116, 0.000197,
    0.000232, 0.000204, 0.000112, -0.000026, -0.000177, -0.000297, -0.000348, -0.000305,
    -0.000168, 0.000036, 0.000255, 0.000428, 0.000499, 0.000435, 0.00024, -0.000048,
    -0.000354, -0.000594, -0.000691, -0.000602, -0.000332, 0.000061, 0.000477, 0.000802,
    0.000932, 0.000811, 0.000449, -0.000076, -0.000629, -0.001058, -0.001229, -0.00107,
    -0.000594, 0.000092, 0.000814, 0.001373, 0.001595, 0.001389, 0.000775, -0.000109,
    -0.001038, -0.001755, -0.00204, -0.001778, -0.000997, 0.000127, 0.001308, 0.002219,
    0.002583, 0.002255, 0.001271, -0.000146, -0.001633, -0.002782, -0.003245, -0.002839,
    -0.001609, 0.000164, 0.002029, 0.003472, 0.004059, 0.00356, 0.002031, -0.000183,
    -0.002516, -0.004328, -0.005075, -0.004466, -0.002565, 0.0002, 0.003127, 0.005413,
    0.006372, 0.005631, 0.003259, -0.000216, -0.003918, -0.006835, -0.008088, -0.007188,
    -0.004199, 0.000231, 0.004994, 0.008795, 0.010485, 0.009391, 0.005549, -0.000243,
    -0.006569, -0.011718, -0.014124, -0.012803, -0.007688, 0.000253, 0.00916, 0.016666,
    0.020472, 0.018954, 0.011692, -0.000261, -0.014419, -0.027262, -0.034914, -0.033976,
    -0.02233, 0.000265, 0.031935, 0.068874, 0.105951, 0.137611, 0.158899, 0.1664,
    0.158899, 0.137611, 0.105951, 0.068874, 0.031935, 0.000265, -0.02233, -0.033976,
    -0.034914, -0.027262, -0.014419, -0.000261, 0.011692, 0.018954, 0.020472, 0.016666,
    0.00916, 0.000253, -0.007688, -0.012803, -0.014124, -0.011718, -0.006569, -0.000243,
    0.005549, 0.009391, 0.010485, 0.008795, 0.004994, 0.000231, -0.004199, -0.007188,
    -0.008088, -0.006835, -0.003918, -0.000216, 0.003259, 0.005631, 0.006372, 0.005413,
    0.003127, 0.0002, -0.002565, -0.004466, -0.005075, -0.004328, -0.002516, -0.000183,
    0.002031, 0.00356, 0.004059, 0.003472, 0.002029, 0.000164, -0.001609, -0.002839,
    -0.003245, -0.002782, -0.001633, -0.000146, 0.001271, 0.002255, 0.002583, 0.002219,
    0.001308, 0.000127, -0.000997, -0.001778, -0.00204, -0.001755, -0.001038, -0.000109,
    0.000775, 0.001389, 0.001595, 0.001373, 0.000814, 0.000092, -0.000594, -0.00107,
    -0.001229, -0.001058, -0.000629, -0.000076, 0.000449, 0.000811, 0.000932, 0.000802,
    0.000477, 0.000061, -0.000332, -0.000602, -0.000691, -0.000594, -0.000354, -0.000048,
    0.00024, 0.000435, 0.000499, 0.000428, 0.000255, 0.000036, -0.000168, -0.000305,
    -0.000348, -0.000297, -0.000177, -0.000026, 0.000112, 0.000204, 0.000232, 0.000197,
    0.000116, 0.000018, -0.000071, -0.000129, -0.000145, -0.000122, -0.000071, -0.000011,
    0.000041, 0.000074, 0.000082, 0.000067, 0.000039, 0.000006, -0.000021,
];

/// 600-800 Hz band-pass, 60 dB stopband, 255 taps (CW receive)
pub const BPF_700_TAPS: [f32; 255] = [
    0.000032, 0.000029, 0.000024, 0.000015, 0.000003, -0.000013, -0.000032, -0.000056,
    -0.000084, -0.000116, -0.00015, -0.000187, -0.000225, -0.000264, -0.000301, -0.000336,
    -0.000367, -0.000391, -0.000408, -0.000414, -0.000409, -0.000391, -0.000358, -0.00031,
    -0.000244, -0.000162, -0.000062, 0.000054, 0.000185, 0.000329, 0.000485, 0.000648,
    0.000816, 0.000984, 0.001148, 0.001302, 0.001441, 0.00156, 0.001654, 0.001717,
    0.001744, 0.001731, 0.001675, 0.001572, 0.00142, 0.001219, 0.000969, 0.000672,
    0.000331, -0.000049, -0.000463, -0.000902, -0.001358, -0.001822, -0.002282, -0.002727,
    -0.003146, -0.003526, -0.003855, -0.004122, -0.004315, -0.004426, -0.004446, -0.004368,
    -0.004187, -0.003901, -0.003511, -0.003019, -0.002429, -0.00175, -0.000992, -0.000168,
    0.000706, 0.001615, 0.002538, 0.003456, 0.004347, 0.005191, 0.005965, 0.006649,
    0.007224, 0.007672, 0.007977, 0.008126, 0.008109, 0.00792, 0.007556, 0.007018,
    0.006311, 0.005446, 0.004435, 0.003295, 0.002047, 0.000715, -0.000676, -0.002096,
    -0.003515, -0.004902, -0.006227, -0.00746, -0.00857, -0.009531, -0.010319, -0.010912,
    -0.011294, -0.011452, -0.011378, -0.011068, -0.010526, -0.009759, -0.008779, -0.007604,
    -0.006257, -0.004763, -0.003153, -0.00146, 0.000282, 0.002035, 0.003763, 0.005429,
    0.006996, 0.008432, 0.009704, 0.010785, 0.011652, 0.012285, 0.012671, 0.0128,
    0.012671, 0.012285, 0.011652, 0.010785, 0.009704, 0.008432, 0.006996, 0.005429,
    0.003763, 0.002035, 0.000282, -0.00146, -0.003153, -0.004763, -0.006257, -0.007604,
    -0.008779, -0.009759, -0.010526, -0.011068, -0.011378, -0.011452, -0.011294, -0.010912,
    -0.010319, -0.009531, -0.00857, -0.00746, -0.006227, -0.004902, -0.003515, -0.002096,
    -0.000676, 0.000715, 0.002047, 0.003295, 0.004435, 0.005446, 0.006311, 0.007018,
    0.007556, 0.00792, 0.008109, 0.008126, 0.007977, 0.007672, 0.007224, 0.006649,
    0.005965, 0.005191, 0.004347, 0.003456, 0.002538, 0.001615, 0.000706, -0.000168,
    -0.000992, -0.00175, -0.002429, -0.003019, -0.003511, -0.003901, -0.004187, -0.004368,
    -0.004446, -0.004426, -0.004315, -0.004122, -0.003855, -0.003526, -0.003146, -0.002727,
    -0.002282, -0.001822, -0.001358, -0.000902, -0.000463, -0.000049, 0.000331, 0.000672,
    0.000969, 0.001219, 0.00142, 0.001572, 0.001675, 0.001731, 0.001744, 0.001717,
    0.001654, 0.00156, 0.001441, 0.001302, 0.001148, 0.000984, 0.000816, 0.000648,
    0.000485, 0.000329, 0.000185, 0.000054, -0.000062, -0.000162, -0.000244, -0.00031,
    -0.000358, -0.000391, -0.000409, -0.000414, -0.000408, -0.000391, -0.000367, -0.000336,
    -0.000301, -0.000264, -0.000225, -0.000187, -0.00015, -0.000116, -0.000084, -0.000056,
    -0.000032, -0.000013, 0.000003, 0.000015, 0.000024, 0.000029, 0.000032,
];

/// 2600 Hz low-pass, 125 taps
///
/// Final shaping of the normalized transmit I and Q branches.
pub const LPF_2600_SHORT_TAPS: [f32; 125] = [
    0.000088, 0.000062, -0.000009, -0.000114, -0.000226, -0.000304, -0.000303, -0.000194,
    0.000022, 0.000305, 0.000576, 0.00074, 0.000709, 0.00044, -0.000043, -0.000637,
    -0.001178, -0.00148, -0.001391, -0.000851, 0.00007, 0.001167, 0.002135, 0.00265,
    0.002464, 0.001497, -0.000104, -0.001971, -0.003589, -0.004425, -0.00409, -0.002481,
    0.000141, 0.003166, 0.005762, 0.007088, 0.006543, 0.003978, -0.000179, -0.004967,
    -0.009082, -0.011206, -0.010386, -0.006369, 0.000214, 0.007885, 0.014599, 0.018227,
    0.017134, 0.010719, -0.000242, -0.013552, -0.025902, -0.033499, -0.032885, -0.02178,
    0.00026, 0.031531, 0.068316, 0.105468, 0.137332, 0.158818, 0.1664, 0.158818,
    0.137332, 0.105468, 0.068316, 0.031531, 0.00026, -0.02178, -0.032885, -0.033499,
    -0.025902, -0.013552, -0.000242, 0.010719, 0.017134, 0.018227, 0.014599, 0.007885,
    0.000214, -0.006369, -0.010386, -0.011206, -0.009082, -0.004967, -0.000179, 0.003978,
    0.006543, 0.007088, 0.005762, 0.003166, 0.000141, -0.002481, -0.00409, -0.004425,
    -0.003589, -0.001971, -0.000104, 0.001497, 0.002464, 0.00265, 0.002135, 0.001167,
    0.00007, -0.000851, -0.001391, -0.00148, -0.001178, -0.000637, -0.000043, 0.00044,
    0.000709, 0.00074, 0.000576, 0.000305, 0.000022, -0.000194, -0.000303, -0.000304,
    -0.000226, -0.000114, -0.000009, 0.000062, 0.000088,
];
