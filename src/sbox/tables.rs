//! The 9 inverse substitution tables used by the FeliCa S_PAD-0 decryptor
//! (spec §4.3). Each table is a fixed byte permutation; `TABLE_8` is the
//! extra table applied only to the outermost layer (index `nTables`).

pub(crate) const TABLE_0: [u8; 256] = [
    0xBC, 0xCA, 0x83, 0x16, 0x67, 0x79, 0x63, 0x95, 0x91, 0x8F, 0xE8, 0x48, 0xFB, 0x3F, 0x85, 0xC4,
    0xD2, 0x3C, 0x71, 0x35, 0xE4, 0x53, 0x69, 0xA1, 0xC9, 0xD0, 0xD3, 0xDA, 0xA9, 0x6D, 0x44, 0x7F,
    0x81, 0x7E, 0x6E, 0xF9, 0xF5, 0x9D, 0x0F, 0x28, 0x45, 0x7B, 0x90, 0x18, 0x2C, 0xFA, 0x27, 0xCB,
    0x99, 0x5C, 0x1F, 0xBD, 0x72, 0x9A, 0x26, 0x2F, 0x32, 0x59, 0x30, 0xB9, 0x97, 0xEE, 0x0E, 0x74,
    0x9B, 0x8E, 0xD4, 0x25, 0xBB, 0x36, 0xF2, 0x6C, 0xF6, 0x55, 0x08, 0xE3, 0x07, 0x93, 0xA5, 0xC6,
    0xC8, 0xA0, 0x9C, 0xF4, 0xD1, 0x94, 0x1D, 0xF3, 0x42, 0x43, 0xD7, 0xC1, 0xDE, 0x6B, 0x4F, 0x02,
    0x4E, 0x8A, 0xCD, 0x1C, 0xB8, 0x23, 0x3E, 0xE5, 0x15, 0xCE, 0xE6, 0x5F, 0x62, 0xA7, 0x14, 0x86,
    0xC7, 0xE0, 0xDC, 0xEB, 0x2B, 0xEC, 0xD8, 0x9F, 0x46, 0x11, 0x09, 0x87, 0x96, 0x70, 0x8D, 0x57,
    0x1A, 0x82, 0xAF, 0x0B, 0x0C, 0x92, 0xA3, 0xFD, 0x65, 0xB3, 0xD6, 0x68, 0xB0, 0xFC, 0xF7, 0x01,
    0x52, 0xDD, 0x4C, 0x4D, 0xF1, 0x39, 0x12, 0x66, 0xFF, 0x7A, 0xA4, 0x56, 0x58, 0xAC, 0x80, 0x22,
    0x34, 0x20, 0x5E, 0x06, 0xBE, 0xBA, 0x13, 0xA6, 0x73, 0xE1, 0x0D, 0x03, 0x54, 0x78, 0x47, 0x98,
    0xDF, 0xEA, 0xE7, 0x60, 0x4B, 0xC0, 0xE2, 0x9E, 0x5B, 0x3B, 0xE9, 0xA8, 0x51, 0x61, 0xD9, 0x31,
    0x1E, 0x8C, 0x84, 0x4A, 0x41, 0xA2, 0x04, 0x50, 0x00, 0x17, 0x49, 0x29, 0x40, 0x1B, 0xB4, 0xB2,
    0x2D, 0x8B, 0x37, 0xC5, 0xCF, 0xB7, 0xF8, 0x89, 0xD5, 0xC3, 0x05, 0xED, 0xB1, 0x6A, 0xB5, 0xB6,
    0x76, 0x24, 0x7C, 0xBF, 0xEF, 0x0A, 0x2E, 0x75, 0xCC, 0x3A, 0xF0, 0xAA, 0xAE, 0x33, 0x7D, 0xAD,
    0x5D, 0x3D, 0xFE, 0x38, 0x21, 0x6F, 0x88, 0x2A, 0x77, 0x10, 0x5A, 0x64, 0x19, 0xC2, 0xAB, 0xDB,
];

pub(crate) const TABLE_1: [u8; 256] = [
    0xEF, 0x14, 0x44, 0x2B, 0x48, 0xB2, 0x6D, 0xDA, 0x45, 0xFB, 0x12, 0x3F, 0x4B, 0xEA, 0x46, 0xDF,
    0x7A, 0xE3, 0xC0, 0xF6, 0xEC, 0xA3, 0x76, 0xA9, 0xC4, 0x6C, 0x28, 0x31, 0x27, 0x02, 0x0B, 0x9F,
    0x6B, 0x1C, 0x61, 0x00, 0x9A, 0x5D, 0xBE, 0x8C, 0x4A, 0x22, 0x70, 0x2D, 0x35, 0x75, 0x2F, 0x57,
    0x3E, 0x93, 0xB0, 0xDD, 0x8D, 0x8A, 0xF4, 0x06, 0x53, 0x0D, 0xD3, 0x2C, 0x7B, 0x51, 0xD1, 0x3C,
    0x10, 0x82, 0x15, 0x03, 0x67, 0x34, 0x24, 0xA4, 0x63, 0x3D, 0x96, 0x58, 0x74, 0xB9, 0xE4, 0xEE,
    0x4C, 0xD6, 0xCC, 0x38, 0x5B, 0x52, 0x69, 0xFF, 0x98, 0xAE, 0x6A, 0x88, 0xD7, 0xE2, 0x65, 0xC5,
    0x1A, 0xCB, 0x3A, 0xE0, 0x49, 0xD9, 0x95, 0xA8, 0x41, 0x81, 0xD4, 0x83, 0x9E, 0xA5, 0xAB, 0xBD,
    0xF7, 0x72, 0xA1, 0x08, 0xFD, 0xB1, 0xE8, 0x47, 0x7F, 0x86, 0x91, 0x62, 0xB4, 0xF9, 0xF2, 0xA0,
    0x4F, 0xD0, 0xAC, 0x55, 0xDB, 0x4D, 0xF5, 0x7D, 0x8F, 0xCF, 0x77, 0x99, 0xAA, 0x50, 0xAD, 0x54,
    0x11, 0x1B, 0xFA, 0x85, 0xCA, 0xBA, 0x7C, 0xD2, 0x39, 0xE6, 0xC1, 0x42, 0x43, 0x79, 0x1F, 0x25,
    0x20, 0x0E, 0x73, 0x05, 0x78, 0x5C, 0xCD, 0x84, 0x3B, 0xC8, 0x9D, 0x0A, 0xB6, 0x87, 0x5A, 0x1D,
    0x2E, 0xCE, 0x5E, 0x0F, 0xC3, 0xEB, 0x37, 0x71, 0x89, 0x23, 0x33, 0x56, 0x94, 0x6E, 0x01, 0x36,
    0xE9, 0x18, 0xD8, 0x09, 0xED, 0x2A, 0x59, 0x4E, 0x16, 0x64, 0xF8, 0x8B, 0x13, 0x97, 0x6F, 0x40,
    0xD5, 0x21, 0xAF, 0xF3, 0xA2, 0x19, 0xF0, 0x04, 0x26, 0xDE, 0xBB, 0x80, 0x30, 0xE5, 0x9C, 0xA7,
    0xB3, 0xB7, 0x7E, 0xBF, 0xB5, 0xBC, 0x07, 0x0C, 0xE1, 0x9B, 0xFC, 0x92, 0xC7, 0x66, 0xC6, 0xA6,
    0x90, 0x5F, 0xB8, 0x68, 0x29, 0xC9, 0x60, 0xE7, 0x8E, 0x17, 0xF1, 0xDC, 0x32, 0xFE, 0xC2, 0x1E,
];

pub(crate) const TABLE_2: [u8; 256] = [
    0x96, 0xD6, 0x75, 0xE4, 0x01, 0x49, 0x73, 0x67, 0xBD, 0x62, 0x40, 0x13, 0x9D, 0xE1, 0x4E, 0x84,
    0xEA, 0x41, 0xF8, 0xE8, 0xCF, 0x76, 0xFD, 0xF1, 0x74, 0x4B, 0x2A, 0xD5, 0x7A, 0x05, 0xBB, 0xF7,
    0x80, 0x42, 0x34, 0x0E, 0x23, 0x8B, 0xA4, 0x81, 0x3F, 0x9C, 0x4C, 0xA3, 0x7D, 0x3E, 0xEF, 0x5B,
    0xDD, 0x00, 0x2F, 0xCA, 0x45, 0x5F, 0xDC, 0x1A, 0xB9, 0xFC, 0xAE, 0xBF, 0x36, 0xB1, 0xDB, 0x1E,
    0xB8, 0xA8, 0x04, 0x43, 0xD4, 0x1B, 0x25, 0xB2, 0x37, 0x5D, 0x52, 0x69, 0x22, 0xD3, 0x2C, 0x97,
    0x0D, 0x85, 0x89, 0x91, 0x92, 0x63, 0x9E, 0x68, 0xA9, 0x71, 0xE3, 0x2B, 0x54, 0x03, 0xE2, 0xEE,
    0x57, 0x30, 0xC5, 0xB4, 0xA1, 0x79, 0x5C, 0x72, 0x98, 0xF2, 0x59, 0x33, 0xAA, 0xC2, 0xF3, 0x7C,
    0x66, 0xAF, 0x8F, 0x1F, 0x5E, 0x3A, 0xE9, 0xC7, 0xC4, 0x51, 0x5A, 0x87, 0xD0, 0xBE, 0xEB, 0xDA,
    0xC6, 0x61, 0x31, 0x08, 0xE7, 0x4D, 0xCE, 0xFE, 0x8A, 0xAC, 0x6C, 0x83, 0x58, 0x1D, 0x09, 0x55,
    0x60, 0x8D, 0x0B, 0xC3, 0x56, 0x93, 0x46, 0xCB, 0xBC, 0x26, 0x6E, 0x9A, 0xD1, 0x88, 0xDE, 0x32,
    0x48, 0x28, 0x78, 0x65, 0xA2, 0x53, 0x7F, 0x3B, 0xB6, 0xAB, 0x02, 0x3C, 0xBA, 0xF4, 0xFF, 0x1C,
    0x2E, 0x35, 0x0F, 0x06, 0x44, 0xE5, 0xF0, 0xF9, 0x10, 0xCD, 0xE0, 0x18, 0xEC, 0x2D, 0x8C, 0xD8,
    0x15, 0x7E, 0xED, 0x6A, 0x99, 0x27, 0x9B, 0x50, 0x64, 0x11, 0xA5, 0x16, 0xB7, 0x6D, 0x19, 0x12,
    0xCC, 0xB3, 0x4A, 0xF5, 0x70, 0xB0, 0xDF, 0x94, 0x86, 0xD2, 0xD9, 0x14, 0xFA, 0xA6, 0xC8, 0xA7,
    0xC0, 0x77, 0x4F, 0x29, 0xF6, 0xC1, 0xFB, 0xAD, 0x8E, 0x90, 0x07, 0x6B, 0x0A, 0xC9, 0x39, 0x3D,
    0x0C, 0x82, 0x6F, 0xB5, 0x17, 0x9F, 0x95, 0xA0, 0x20, 0x7B, 0x47, 0x21, 0x24, 0x38, 0xE6, 0xD7,
];

pub(crate) const TABLE_3: [u8; 256] = [
    0x4C, 0x5F, 0xAA, 0x37, 0xB3, 0x39, 0x48, 0x7E, 0x2D, 0x05, 0x98, 0xE1, 0x90, 0x3B, 0xFD, 0x9F,
    0xDA, 0x43, 0x4E, 0x46, 0x8E, 0xDD, 0x58, 0x09, 0xEB, 0x7D, 0x4F, 0x2C, 0xF3, 0xC2, 0x13, 0x93,
    0x47, 0x25, 0x02, 0xC7, 0x85, 0x9C, 0x59, 0x1A, 0x19, 0x87, 0x53, 0x66, 0xA7, 0xE8, 0xAC, 0x77,
    0x34, 0x96, 0xA6, 0x9A, 0x7C, 0xC9, 0xFC, 0xF1, 0xF4, 0x3F, 0xA1, 0xD5, 0x36, 0xCB, 0xC6, 0x86,
    0x1E, 0x49, 0x75, 0x71, 0x7B, 0x14, 0x1C, 0x2B, 0xA5, 0x1F, 0xD4, 0xDB, 0xCF, 0x1D, 0x9D, 0x29,
    0x5E, 0x07, 0x5B, 0x88, 0x68, 0xED, 0x42, 0x0A, 0x27, 0xE4, 0x1B, 0x31, 0x12, 0xD8, 0x84, 0x24,
    0xB6, 0x0B, 0xE9, 0x04, 0xBF, 0x6B, 0xBD, 0x2A, 0x92, 0xBC, 0xD1, 0xE3, 0x7F, 0x4A, 0x30, 0x15,
    0x17, 0xBB, 0xBA, 0x78, 0xA2, 0x97, 0xEC, 0xA0, 0xC1, 0x0D, 0xFB, 0x70, 0x3E, 0x99, 0xA8, 0xD2,
    0x0E, 0x50, 0x54, 0x11, 0x4D, 0x2F, 0x6A, 0xEA, 0x69, 0x5A, 0xB4, 0x35, 0x01, 0xDE, 0x7A, 0xCA,
    0xE7, 0xCD, 0x3C, 0x28, 0xB5, 0x0C, 0x03, 0xFA, 0x83, 0xD6, 0xD7, 0x20, 0x91, 0x9B, 0x65, 0x52,
    0x6C, 0xA9, 0xEF, 0xF2, 0xD0, 0xD9, 0x45, 0xEE, 0xB9, 0x6E, 0xCC, 0xC0, 0x18, 0x63, 0x6F, 0x82,
    0x8C, 0x26, 0x5D, 0xA3, 0xF9, 0xD3, 0x33, 0x61, 0xF5, 0x2E, 0x40, 0x9E, 0x95, 0xBE, 0x22, 0xAD,
    0xC4, 0xF7, 0xC8, 0xC3, 0xCE, 0x32, 0x6D, 0x60, 0x41, 0x21, 0xF6, 0x44, 0xDC, 0x62, 0xC5, 0xB2,
    0x3D, 0xF8, 0xE2, 0x57, 0x64, 0x23, 0x00, 0x8D, 0xFF, 0xAF, 0xE0, 0x51, 0x0F, 0x8B, 0x89, 0xAE,
    0x3A, 0xA4, 0x08, 0xB1, 0xAB, 0xB7, 0x81, 0xE6, 0x94, 0x56, 0xDF, 0x4B, 0xE5, 0x16, 0xF0, 0x73,
    0x80, 0x79, 0x10, 0x55, 0xB0, 0x06, 0x67, 0x74, 0x8A, 0x72, 0x76, 0xB8, 0x38, 0x5C, 0x8F, 0xFE,
];

pub(crate) const TABLE_4: [u8; 256] = [
    0x08, 0xBF, 0xF5, 0xB5, 0xF6, 0x12, 0x33, 0x5C, 0xA4, 0x66, 0x45, 0x55, 0xA7, 0x0A, 0x86, 0x7B,
    0x48, 0xB0, 0xAD, 0x62, 0x41, 0x59, 0xFA, 0x99, 0x10, 0xCC, 0x3A, 0x95, 0x34, 0x97, 0xE3, 0x36,
    0x9F, 0xC0, 0x94, 0x4C, 0x4E, 0xEA, 0x74, 0xCD, 0xE5, 0xE1, 0x32, 0x96, 0x72, 0xE4, 0x5A, 0xEC,
    0x39, 0xAE, 0x23, 0xED, 0x2E, 0xC2, 0x51, 0xDB, 0x3D, 0xDF, 0xEB, 0x8C, 0x13, 0x52, 0x75, 0xFF,
    0xCB, 0x8B, 0xE2, 0x09, 0x3B, 0xFD, 0x0B, 0x18, 0x89, 0xDE, 0x68, 0x1D, 0x44, 0x6B, 0x16, 0xAF,
    0x2B, 0x1F, 0x22, 0x6A, 0x85, 0x93, 0x31, 0x73, 0x2D, 0x92, 0xE6, 0x91, 0x40, 0x50, 0x14, 0xFE,
    0xA0, 0xC3, 0xA2, 0xAA, 0x65, 0x4A, 0x8F, 0xF0, 0x61, 0x54, 0xDC, 0x9A, 0xE7, 0x5F, 0x80, 0x00,
    0x67, 0xC7, 0xCE, 0xD3, 0x3E, 0xEE, 0x42, 0x87, 0x29, 0x58, 0xBA, 0xF7, 0x03, 0x98, 0xBD, 0x47,
    0xEF, 0xA8, 0x9D, 0x02, 0x5D, 0xDA, 0xFB, 0x56, 0x7F, 0x84, 0x60, 0x15, 0xF8, 0x1C, 0x46, 0x37,
    0x1A, 0x0D, 0x8E, 0x7E, 0xAC, 0x6F, 0xDD, 0xA1, 0x43, 0xC8, 0x69, 0x79, 0xA5, 0x19, 0x90, 0xF3,
    0xBE, 0x38, 0xD0, 0xBC, 0xF4, 0xB9, 0x4F, 0x25, 0xD5, 0x9B, 0xC9, 0xCA, 0x5B, 0x88, 0xE8, 0x76,
    0x05, 0x28, 0xB4, 0x78, 0x2C, 0x21, 0x77, 0xE0, 0x2A, 0x70, 0x64, 0xC1, 0x7D, 0x6C, 0x7C, 0xA9,
    0x2F, 0xF2, 0x0E, 0x71, 0x49, 0x63, 0xB2, 0x04, 0x3F, 0xD2, 0x8D, 0x4B, 0x0C, 0xBB, 0x7A, 0xD1,
    0x6D, 0x1E, 0x07, 0x4D, 0x6E, 0x53, 0x83, 0xD6, 0x17, 0x27, 0x20, 0x06, 0xB6, 0x24, 0x01, 0xFC,
    0x3C, 0x81, 0x11, 0x5E, 0x9E, 0xF1, 0x26, 0xCF, 0xD9, 0xB7, 0xC4, 0xB3, 0x0F, 0xA6, 0x57, 0x35,
    0xC6, 0xD8, 0xE9, 0xD4, 0xC5, 0x30, 0xA3, 0x82, 0xAB, 0xB1, 0x8A, 0x9C, 0xB8, 0xF9, 0x1B, 0xD7,
];

pub(crate) const TABLE_5: [u8; 256] = [
    0x23, 0x0F, 0x5A, 0x45, 0x83, 0x03, 0xED, 0xC8, 0x01, 0x4A, 0x31, 0xF6, 0xBF, 0x47, 0xB1, 0x4D,
    0x25, 0x2E, 0xAE, 0x97, 0x72, 0x11, 0x6D, 0x7C, 0xB5, 0x7E, 0x8F, 0x0D, 0xDB, 0x90, 0xE2, 0xBB,
    0x2C, 0x1A, 0xBC, 0xD6, 0x38, 0x73, 0xE9, 0x06, 0x4F, 0x61, 0xD7, 0x68, 0x14, 0xD1, 0x9B, 0x28,
    0x51, 0x9A, 0x1E, 0x2F, 0x15, 0x33, 0xE5, 0xBE, 0xB7, 0x2B, 0xBD, 0x3E, 0xB0, 0xD3, 0x00, 0x24,
    0xC3, 0x19, 0xA5, 0x95, 0xC2, 0xEB, 0xCC, 0xEA, 0xAC, 0x81, 0xA7, 0xBA, 0x86, 0xDA, 0x21, 0xFC,
    0x58, 0x1D, 0xEE, 0x78, 0xDD, 0xDF, 0x22, 0x6A, 0xA8, 0xEC, 0x17, 0x13, 0xB2, 0x7B, 0x42, 0xE7,
    0x67, 0xC7, 0x41, 0xE8, 0x27, 0xC6, 0x8E, 0xD9, 0xF9, 0x9F, 0x9E, 0x62, 0xB8, 0x37, 0xF8, 0x3C,
    0x1B, 0xFA, 0x80, 0x7F, 0xA0, 0xF3, 0xA4, 0xE1, 0x56, 0x53, 0xC1, 0x85, 0x8B, 0x05, 0x6E, 0xFD,
    0x50, 0x1C, 0x40, 0x93, 0xCD, 0x5D, 0x32, 0x63, 0x3A, 0xB9, 0xD4, 0x84, 0xB3, 0x54, 0xD0, 0xA2,
    0x12, 0x3F, 0x96, 0x6F, 0x6C, 0xE3, 0x88, 0x7A, 0x59, 0xC9, 0x60, 0xD8, 0x2A, 0x39, 0x29, 0xDE,
    0xB4, 0xC4, 0x76, 0x3D, 0x10, 0x70, 0x20, 0x36, 0x0A, 0x07, 0x75, 0x02, 0x87, 0x08, 0x26, 0xA1,
    0xAF, 0xFB, 0x77, 0x9D, 0x30, 0x91, 0x5C, 0x8D, 0x49, 0x65, 0x9C, 0x5F, 0x04, 0xDC, 0xD2, 0x48,
    0x82, 0x55, 0x71, 0x74, 0xD5, 0x99, 0x6B, 0x46, 0x4E, 0xAA, 0xAD, 0xFE, 0x44, 0x0C, 0x8A, 0xB6,
    0xF4, 0x64, 0x98, 0xC0, 0x34, 0x79, 0xEF, 0xA6, 0x4B, 0x16, 0x3B, 0x43, 0x18, 0xF0, 0x57, 0x0E,
    0xC5, 0xF5, 0x0B, 0xCB, 0x94, 0xAB, 0xF2, 0x09, 0xCF, 0x35, 0xCE, 0x5E, 0x52, 0xE4, 0xFF, 0x1F,
    0x7D, 0x2D, 0xA9, 0x8C, 0x5B, 0x4C, 0xA3, 0x92, 0xF1, 0xE0, 0x69, 0x89, 0x66, 0xE6, 0xCA, 0xF7,
];

pub(crate) const TABLE_6: [u8; 256] = [
    0x37, 0xAD, 0xEC, 0x58, 0x9A, 0x59, 0x4B, 0xF2, 0xC9, 0x6C, 0x5D, 0xD9, 0x25, 0x47, 0xAB, 0x57,
    0xED, 0x27, 0x04, 0x09, 0x2B, 0xC1, 0x8F, 0xFE, 0x31, 0x56, 0xBA, 0xF9, 0xFD, 0xB3, 0xAE, 0x78,
    0x1F, 0xF1, 0xA6, 0xCE, 0xD3, 0xFA, 0x66, 0x4A, 0xCB, 0x22, 0x81, 0x79, 0xA9, 0x1C, 0xE2, 0x6B,
    0x46, 0x9F, 0x3E, 0x8B, 0x48, 0x7E, 0x0D, 0x13, 0xAF, 0x88, 0xC0, 0x40, 0xDE, 0xCD, 0xE0, 0x05,
    0xBE, 0x39, 0x83, 0x70, 0x54, 0x8E, 0x9C, 0xDA, 0x9B, 0x92, 0x29, 0x6A, 0xA0, 0xB8, 0x11, 0x32,
    0xF8, 0x3C, 0xE7, 0x72, 0xF6, 0x74, 0xEF, 0x3B, 0xAC, 0x6F, 0x1D, 0x18, 0xF3, 0x6E, 0x8D, 0xE1,
    0x28, 0xD6, 0x65, 0xB6, 0xD7, 0x99, 0x5F, 0xA1, 0xFB, 0xC5, 0xA7, 0xD2, 0xDC, 0x20, 0x2D, 0x51,
    0x8A, 0xCF, 0x16, 0xEA, 0xF7, 0x44, 0xBB, 0xD5, 0xBF, 0xDB, 0x06, 0xEB, 0x95, 0x7A, 0x23, 0x91,
    0xCA, 0x2E, 0x1E, 0xB0, 0xB5, 0x42, 0x4D, 0xB4, 0x7F, 0x89, 0xF0, 0x36, 0xD4, 0x94, 0x5B, 0x1A,
    0xD0, 0xB9, 0xAA, 0x38, 0x76, 0x63, 0xE5, 0x2C, 0x77, 0x68, 0x9E, 0x3F, 0xE3, 0xD1, 0x50, 0xA4,
    0xFC, 0xE8, 0x7C, 0x0B, 0xB2, 0x64, 0x08, 0x3D, 0x24, 0x5E, 0xC7, 0x55, 0x7B, 0x82, 0x0F, 0x80,
    0x15, 0x01, 0x14, 0x5C, 0x21, 0x2A, 0x33, 0x61, 0x87, 0x10, 0x97, 0x30, 0x19, 0x6D, 0x85, 0x98,
    0x8C, 0x41, 0x75, 0xFF, 0xB7, 0x2F, 0xA5, 0x90, 0xA3, 0x69, 0xC6, 0x86, 0x1B, 0xE9, 0x53, 0x5A,
    0x7D, 0x60, 0x73, 0xCC, 0xDD, 0x62, 0x9D, 0xD8, 0x17, 0x49, 0xC8, 0x43, 0x0A, 0x02, 0xBC, 0xC2,
    0xF4, 0xBD, 0x4C, 0x0C, 0x45, 0xF5, 0x4E, 0x07, 0xDF, 0x67, 0x12, 0x96, 0x26, 0xA2, 0x4F, 0xC3,
    0xE4, 0x84, 0xE6, 0x35, 0xC4, 0x00, 0xA8, 0x52, 0x93, 0xEE, 0x34, 0x03, 0x71, 0x3A, 0x0E, 0xB1,
];

pub(crate) const TABLE_7: [u8; 256] = [
    0x70, 0x8D, 0xA7, 0xAD, 0x2E, 0xA8, 0x16, 0xE5, 0xD7, 0x09, 0x5A, 0x81, 0x7C, 0xEC, 0x23, 0xB6,
    0xFC, 0x90, 0x65, 0x80, 0x28, 0xAA, 0x96, 0x5B, 0xCA, 0xD0, 0x88, 0x35, 0x8B, 0x00, 0xBF, 0x8C,
    0x93, 0x61, 0x7A, 0x29, 0x54, 0x68, 0xC7, 0x91, 0x62, 0x4E, 0x1C, 0x0B, 0x57, 0xA6, 0xBC, 0xFE,
    0x42, 0x14, 0xAC, 0xD9, 0x4C, 0x47, 0xB9, 0x95, 0x03, 0xB4, 0xD8, 0x27, 0x7D, 0x79, 0xE8, 0x07,
    0x1A, 0xC4, 0x82, 0xD5, 0x26, 0x7F, 0x2A, 0x1B, 0xDC, 0x9E, 0xAE, 0x99, 0x87, 0xC5, 0x15, 0x76,
    0x2B, 0xDF, 0x22, 0x6A, 0x67, 0xFA, 0xDE, 0x9C, 0xAF, 0x19, 0x41, 0xE2, 0xA9, 0xC3, 0x83, 0xFD,
    0x6B, 0x53, 0xCD, 0xA1, 0xDB, 0x9A, 0x13, 0x86, 0x0A, 0x34, 0xFF, 0x4D, 0x58, 0xC1, 0xF6, 0xB2,
    0xB1, 0xD1, 0x56, 0x25, 0xE1, 0xF8, 0xD3, 0x21, 0xCE, 0xB3, 0x38, 0x73, 0x5C, 0x6E, 0x59, 0xA3,
    0xF9, 0x3B, 0xEF, 0xC6, 0x20, 0xF7, 0x78, 0xEA, 0xD2, 0xE4, 0xED, 0xC0, 0xBA, 0x8A, 0x05, 0x31,
    0xA4, 0xE0, 0x36, 0xCB, 0x50, 0x66, 0x75, 0x77, 0xC9, 0x89, 0x0F, 0x5E, 0x3F, 0xB8, 0xDA, 0xF5,
    0xF4, 0xEE, 0x43, 0x18, 0x49, 0x8F, 0x37, 0x63, 0x9D, 0x40, 0xA0, 0x24, 0xF3, 0xFB, 0x01, 0x5F,
    0x51, 0x5D, 0x11, 0x3C, 0x1D, 0xF0, 0x7B, 0xBE, 0x9B, 0xC8, 0x7E, 0x84, 0x04, 0x33, 0x2F, 0x69,
    0x45, 0x60, 0xE9, 0x44, 0x6C, 0xC2, 0xEB, 0x64, 0x74, 0x1F, 0x71, 0x97, 0x0C, 0x02, 0x3E, 0x17,
    0x52, 0x92, 0x55, 0x06, 0xDD, 0x3A, 0x4A, 0x4B, 0x6D, 0xA5, 0xB0, 0x46, 0xF2, 0xF1, 0xAB, 0x1E,
    0x12, 0xB5, 0x3D, 0x30, 0xD4, 0x6F, 0xE7, 0x08, 0x9F, 0xE6, 0xBB, 0x48, 0x94, 0x72, 0x0D, 0x8E,
    0x32, 0xA2, 0x0E, 0x85, 0x39, 0x2D, 0xCF, 0xB7, 0xBD, 0x4F, 0xE3, 0x2C, 0x98, 0xD6, 0xCC, 0x10,
];

pub(crate) const TABLE_8: [u8; 256] = [
    0xD7, 0xB1, 0x21, 0xE7, 0xA1, 0x9A, 0x27, 0xDA, 0xCB, 0x45, 0xB4, 0xB9, 0xB0, 0x4B, 0x2F, 0x56,
    0xBA, 0xDB, 0xB2, 0x7B, 0x1D, 0x9D, 0xC1, 0xC7, 0xC9, 0x62, 0x07, 0x6D, 0x74, 0xA5, 0x4E, 0x3C,
    0x9C, 0x71, 0x04, 0x48, 0xAE, 0x96, 0x85, 0x44, 0x49, 0x35, 0x08, 0x10, 0xD4, 0xD2, 0x11, 0x2D,
    0x92, 0x66, 0x31, 0x87, 0xFB, 0xBD, 0x13, 0xD8, 0x6B, 0x46, 0x79, 0x98, 0x4D, 0xEB, 0x09, 0x26,
    0x64, 0xA3, 0x5A, 0xF6, 0x63, 0x67, 0x8B, 0x29, 0x1F, 0x55, 0x30, 0x22, 0x2B, 0x86, 0x16, 0x17,
    0xC0, 0x0E, 0xAA, 0x88, 0x72, 0x77, 0x06, 0x2C, 0x5E, 0x91, 0x9E, 0x65, 0xFC, 0x0B, 0xD6, 0xAD,
    0xAF, 0x78, 0x6C, 0xBF, 0xE6, 0x00, 0x2E, 0x8E, 0xD9, 0x8F, 0x81, 0xE9, 0x8D, 0xC3, 0x1E, 0x23,
    0x95, 0xEE, 0x36, 0x41, 0xA0, 0x3B, 0x4F, 0xD5, 0x01, 0x32, 0x33, 0x68, 0x12, 0xE8, 0x82, 0xF4,
    0x9B, 0xCF, 0x40, 0xCC, 0xBB, 0xA2, 0x6F, 0x54, 0xA4, 0x34, 0x61, 0x03, 0x9F, 0x99, 0x05, 0xFD,
    0xC2, 0xE0, 0x50, 0x94, 0x2A, 0x19, 0x4A, 0x84, 0x3E, 0xBE, 0x6E, 0x7E, 0x28, 0x83, 0x0D, 0xF5,
    0x15, 0xA7, 0x43, 0x7A, 0x8C, 0xD1, 0xEF, 0xE1, 0xA6, 0xE2, 0xB3, 0x76, 0x7D, 0xE4, 0xFA, 0xCE,
    0x51, 0x47, 0xB7, 0xE5, 0x0F, 0xCD, 0xF2, 0x7F, 0x3D, 0x80, 0xEA, 0xF8, 0x5B, 0x6A, 0xED, 0x93,
    0x5D, 0xA8, 0x69, 0xF1, 0x52, 0x90, 0xC5, 0x75, 0x5C, 0xD0, 0x20, 0xC6, 0xFE, 0x4C, 0x73, 0xB8,
    0x70, 0xDD, 0xDC, 0x3F, 0x5F, 0x39, 0xC8, 0xFF, 0x18, 0x1B, 0x59, 0x60, 0x3A, 0xF9, 0xBC, 0xF7,
    0x37, 0x0A, 0x89, 0x25, 0x7C, 0x38, 0x42, 0x53, 0xDE, 0xCA, 0x8A, 0x02, 0xAB, 0x58, 0xF0, 0x1C,
    0x97, 0xAC, 0xDF, 0x24, 0xD3, 0xB6, 0xA9, 0xF3, 0x0C, 0x1A, 0xEC, 0xC4, 0xB5, 0x14, 0x57, 0xE3,
];

