// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hand-assembled well-known binary blobs
//!
//! These cover wire shapes that common writer libraries will not produce:
//! EWKB flag bits, big-endian records, the MultiCurve/MultiSurface codes,
//! mixed byte orders inside one blob, and non-finite coordinates.

fn push_le_record_header(buf: &mut Vec<u8>, code: u32) {
    buf.push(0x01);
    buf.extend_from_slice(&code.to_le_bytes());
}

fn push_be_record_header(buf: &mut Vec<u8>, code: u32) {
    buf.push(0x00);
    buf.extend_from_slice(&code.to_be_bytes());
}

/// A little-endian EWKB 2.5D MULTIPOLYGON using the high-bit Z flag
/// (0x80000000) rather than the ISO +1000 offset
///
/// One polygon with a single closed ring of 15 XYZ points.
pub fn multipolygon_z_ewkb() -> Vec<u8> {
    const Z_FLAG: u32 = 0x80000000;
    let ring: [(f64, f64, f64); 15] = [
        (482375.64, 5455229.91, 107.42),
        (482398.25, 5455241.33, 107.51),
        (482421.80, 5455252.04, 107.66),
        (482443.12, 5455246.58, 107.83),
        (482459.37, 5455231.75, 108.02),
        (482466.91, 5455210.46, 108.15),
        (482461.23, 5455188.90, 108.11),
        (482444.76, 5455173.28, 107.94),
        (482422.05, 5455166.47, 107.70),
        (482399.48, 5455171.12, 107.48),
        (482382.66, 5455185.39, 107.33),
        (482374.19, 5455206.21, 107.29),
        (482373.55, 5455218.84, 107.34),
        (482374.40, 5455225.73, 107.38),
        (482375.64, 5455229.91, 107.42),
    ];

    let mut buf = Vec::new();
    push_le_record_header(&mut buf, 6 | Z_FLAG);
    buf.extend_from_slice(&1u32.to_le_bytes());

    push_le_record_header(&mut buf, 3 | Z_FLAG);
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&15u32.to_le_bytes());
    for (x, y, z) in ring {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
        buf.extend_from_slice(&z.to_le_bytes());
    }

    buf
}

/// A big-endian MULTICURVE (code 11) holding two LINESTRINGs of 3 and 10
/// points
pub fn multicurve_two_linestrings_be_wkb() -> Vec<u8> {
    let first: [(f64, f64); 3] = [
        (18.889800697319032, -35.036463112927535),
        (19.037233904214556, -34.91830029034475),
        (19.22446022767381, -34.759383061500965),
    ];
    let second: [(f64, f64); 10] = [
        (-79.14215210584127, 38.8817360289352),
        (-78.83106535787875, 39.42607323384558),
        (-78.51667828558243, 39.971156312142304),
        (-78.19893524879291, 40.51696922843242),
        (-77.87777929140912, 41.06349572973966),
        (-77.55315208847091, 41.61071932634661),
        (-77.22499390288667, 42.158623282770494),
        (-76.89324353196857, 42.70719059837801),
        (-76.55783826395714, 43.25640397768739),
        (-76.52909336488278, 44.2390383216843),
    ];

    let mut buf = Vec::new();
    push_be_record_header(&mut buf, 11);
    buf.extend_from_slice(&2u32.to_be_bytes());

    push_be_record_header(&mut buf, 2);
    buf.extend_from_slice(&(first.len() as u32).to_be_bytes());
    for (x, y) in first {
        buf.extend_from_slice(&x.to_be_bytes());
        buf.extend_from_slice(&y.to_be_bytes());
    }

    push_be_record_header(&mut buf, 2);
    buf.extend_from_slice(&(second.len() as u32).to_be_bytes());
    for (x, y) in second {
        buf.extend_from_slice(&x.to_be_bytes());
        buf.extend_from_slice(&y.to_be_bytes());
    }

    buf
}

/// A little-endian MULTICURVE holding one COMPOUNDCURVE of two LINESTRING
/// segments (3 and 2 points) joined at (3451409.995, 5481806.744)
pub fn multicurve_compound_curve_wkb() -> Vec<u8> {
    let first: [(f64, f64); 3] = [
        (3451385.161, 5481826.335),
        (3451398.812, 5481817.385),
        (3451409.995, 5481806.744),
    ];
    let second: [(f64, f64); 2] = [(3451409.995, 5481806.744), (3451421.148, 5481795.391)];

    let mut buf = Vec::new();
    push_le_record_header(&mut buf, 11);
    buf.extend_from_slice(&1u32.to_le_bytes());

    push_le_record_header(&mut buf, 9);
    buf.extend_from_slice(&2u32.to_le_bytes());

    push_le_record_header(&mut buf, 2);
    buf.extend_from_slice(&(first.len() as u32).to_le_bytes());
    for (x, y) in first {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }

    push_le_record_header(&mut buf, 2);
    buf.extend_from_slice(&(second.len() as u32).to_le_bytes());
    for (x, y) in second {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }

    buf
}

/// A big-endian MULTIPOLYGON whose two POLYGON children are written in
/// different byte orders (first little-endian, second big-endian) but carry
/// identical coordinates
pub fn mixed_endian_multipolygon_wkb() -> Vec<u8> {
    let ring: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)];

    let mut buf = Vec::new();
    push_be_record_header(&mut buf, 6);
    buf.extend_from_slice(&2u32.to_be_bytes());

    push_le_record_header(&mut buf, 3);
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&(ring.len() as u32).to_le_bytes());
    for (x, y) in ring {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }

    push_be_record_header(&mut buf, 3);
    buf.extend_from_slice(&1u32.to_be_bytes());
    buf.extend_from_slice(&(ring.len() as u32).to_be_bytes());
    for (x, y) in ring {
        buf.extend_from_slice(&x.to_be_bytes());
        buf.extend_from_slice(&y.to_be_bytes());
    }

    buf
}

/// A little-endian LINESTRING of 8 points where indices 1, 3, 5, and 6 carry
/// a non-finite ordinate (NaN, +inf, -inf, NaN respectively)
pub fn linestring_with_non_finite_wkb() -> Vec<u8> {
    let points: [(f64, f64); 8] = [
        (0.0, 0.0),
        (f64::NAN, 1.0),
        (2.0, 2.0),
        (3.0, f64::INFINITY),
        (4.0, 4.0),
        (f64::NEG_INFINITY, 5.0),
        (6.0, f64::NAN),
        (7.0, 7.0),
    ];

    let mut buf = Vec::new();
    push_le_record_header(&mut buf, 2);
    buf.extend_from_slice(&(points.len() as u32).to_le_bytes());
    for (x, y) in points {
        buf.extend_from_slice(&x.to_le_bytes());
        buf.extend_from_slice(&y.to_le_bytes());
    }

    buf
}

/// A little-endian POINT whose x ordinate is NaN (y is finite)
pub fn point_nan_x_wkb() -> Vec<u8> {
    let mut buf = Vec::new();
    push_le_record_header(&mut buf, 1);
    buf.extend_from_slice(&f64::NAN.to_le_bytes());
    buf.extend_from_slice(&1.0f64.to_le_bytes());
    buf
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixture_sizes() {
        // multipolygon: 2 headers (5 + 4) + ring header (4) + 15 * 24
        assert_eq!(multipolygon_z_ewkb().len(), 9 + 5 + 4 + 4 + 15 * 24);
        // multicurve: header (9) + 2 * (linestring header 9) + 13 * 16
        assert_eq!(multicurve_two_linestrings_be_wkb().len(), 9 + 9 + 9 + 13 * 16);
        assert_eq!(linestring_with_non_finite_wkb().len(), 9 + 8 * 16);
        assert_eq!(point_nan_x_wkb().len(), 21);
    }

    #[test]
    fn fixture_headers() {
        assert_eq!(multipolygon_z_ewkb()[..5], [0x01, 0x06, 0x00, 0x00, 0x80]);
        assert_eq!(
            multicurve_two_linestrings_be_wkb()[..5],
            [0x00, 0x00, 0x00, 0x00, 0x0b]
        );
        assert_eq!(
            multicurve_compound_curve_wkb()[..5],
            [0x01, 0x0b, 0x00, 0x00, 0x00]
        );
        assert_eq!(mixed_endian_multipolygon_wkb()[0], 0x00);
    }
}
