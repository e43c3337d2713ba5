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
use std::{fmt::Display, str::FromStr};

use geo_traits::Dimensions;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::KarstGeometryError;
use crate::geometry::Geometry;

/// EWKB flag marking the presence of Z ordinates in a type code
pub const Z_FLAG_BIT: u32 = 0x80000000;
/// EWKB flag marking the presence of M ordinates in a type code
pub const M_FLAG_BIT: u32 = 0x40000000;
/// EWKB flag marking an embedded SRID after the type code
pub const SRID_FLAG_BIT: u32 = 0x20000000;

/// Byte order of multibyte fields in a WKB record
///
/// Every record declares its own order with a one-byte marker:
/// 0x00 for big-endian, 0x01 for little-endian.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Parse a byte-order marker byte
    pub fn try_from_marker(marker: u8) -> Result<Self, KarstGeometryError> {
        match marker {
            0x00 => Ok(Self::BigEndian),
            0x01 => Ok(Self::LittleEndian),
            other => Err(KarstGeometryError::MalformedHeader(format!(
                "unexpected byte order marker {other:#04x}"
            ))),
        }
    }

    /// The marker byte written at the start of a record
    pub fn marker(&self) -> u8 {
        match self {
            Self::BigEndian => 0x00,
            Self::LittleEndian => 0x01,
        }
    }
}

/// Geometry types
///
/// An enumerator for the full Simple Features type set without considering
/// [Dimensions]. See [GeometryCode] for the struct that tracks both.
///
/// The abstract entries (Geometry, Curve, Surface, MultiCurve, MultiSurface)
/// never appear as the stored type of a constructed geometry; MultiCurve and
/// MultiSurface exist on the wire only.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Hash, Clone, Copy)]
pub enum GeometryTypeId {
    /// Unknown or mixed geometry type
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    CircularString,
    CompoundCurve,
    CurvePolygon,
    /// Abstract collection of curves; decodes to a GeometryCollection
    MultiCurve,
    /// Abstract collection of surfaces; decodes to a GeometryCollection
    MultiSurface,
    Curve,
    Surface,
    PolyhedralSurface,
    Tin,
    Triangle,
}

impl GeometryTypeId {
    /// Construct a geometry type from the base of a WKB type code
    ///
    /// Parses the geometry type (not dimension) component of a WKB type code
    /// (e.g., 1 for Point...17 for Triangle).
    pub fn try_from_wkb_id(wkb_id: u32) -> Result<Self, KarstGeometryError> {
        match wkb_id {
            0 => Ok(Self::Geometry),
            1 => Ok(Self::Point),
            2 => Ok(Self::LineString),
            3 => Ok(Self::Polygon),
            4 => Ok(Self::MultiPoint),
            5 => Ok(Self::MultiLineString),
            6 => Ok(Self::MultiPolygon),
            7 => Ok(Self::GeometryCollection),
            8 => Ok(Self::CircularString),
            9 => Ok(Self::CompoundCurve),
            10 => Ok(Self::CurvePolygon),
            11 => Ok(Self::MultiCurve),
            12 => Ok(Self::MultiSurface),
            13 => Ok(Self::Curve),
            14 => Ok(Self::Surface),
            15 => Ok(Self::PolyhedralSurface),
            16 => Ok(Self::Tin),
            17 => Ok(Self::Triangle),
            _ => Err(KarstGeometryError::UnknownTypeCode(wkb_id)),
        }
    }

    /// The geometry-type portion of the WKB type code
    pub fn wkb_id(&self) -> u32 {
        match self {
            Self::Geometry => 0,
            Self::Point => 1,
            Self::LineString => 2,
            Self::Polygon => 3,
            Self::MultiPoint => 4,
            Self::MultiLineString => 5,
            Self::MultiPolygon => 6,
            Self::GeometryCollection => 7,
            Self::CircularString => 8,
            Self::CompoundCurve => 9,
            Self::CurvePolygon => 10,
            Self::MultiCurve => 11,
            Self::MultiSurface => 12,
            Self::Curve => 13,
            Self::Surface => 14,
            Self::PolyhedralSurface => 15,
            Self::Tin => 16,
            Self::Triangle => 17,
        }
    }

    /// The conventional camel-case identifier for this geometry type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Geometry => "Geometry",
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
            Self::CircularString => "CircularString",
            Self::CompoundCurve => "CompoundCurve",
            Self::CurvePolygon => "CurvePolygon",
            Self::MultiCurve => "MultiCurve",
            Self::MultiSurface => "MultiSurface",
            Self::Curve => "Curve",
            Self::Surface => "Surface",
            Self::PolyhedralSurface => "PolyhedralSurface",
            Self::Tin => "Tin",
            Self::Triangle => "Triangle",
        }
    }

    /// Whether this type is abstract (never the stored type of a value)
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            Self::Geometry | Self::Curve | Self::Surface | Self::MultiCurve | Self::MultiSurface
        )
    }
}

impl Display for GeometryTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeometryTypeId {
    type Err = KarstGeometryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value_lower = value.to_ascii_lowercase();
        match value_lower.as_str() {
            "geometry" => Ok(Self::Geometry),
            "point" => Ok(Self::Point),
            "linestring" => Ok(Self::LineString),
            "polygon" => Ok(Self::Polygon),
            "multipoint" => Ok(Self::MultiPoint),
            "multilinestring" => Ok(Self::MultiLineString),
            "multipolygon" => Ok(Self::MultiPolygon),
            "geometrycollection" => Ok(Self::GeometryCollection),
            "circularstring" => Ok(Self::CircularString),
            "compoundcurve" => Ok(Self::CompoundCurve),
            "curvepolygon" => Ok(Self::CurvePolygon),
            "multicurve" => Ok(Self::MultiCurve),
            "multisurface" => Ok(Self::MultiSurface),
            "curve" => Ok(Self::Curve),
            "surface" => Ok(Self::Surface),
            "polyhedralsurface" => Ok(Self::PolyhedralSurface),
            "tin" => Ok(Self::Tin),
            "triangle" => Ok(Self::Triangle),
            _ => Err(KarstGeometryError::Invalid(format!(
                "Invalid geometry type string: '{value}'"
            ))),
        }
    }
}

pub(crate) fn dims_have_z(dimensions: Dimensions) -> bool {
    matches!(dimensions, Dimensions::Xyz | Dimensions::Xyzm)
}

pub(crate) fn dims_have_m(dimensions: Dimensions) -> bool {
    matches!(dimensions, Dimensions::Xym | Dimensions::Xyzm)
}

/// Geometry type and dimensions as encoded in a WKB type code
///
/// Combines a [GeometryTypeId] with [Dimensions] to form the 32-bit type code
/// of a WKB record header. Encoding always uses the ISO additive scheme
/// (base + 1000 for Z + 2000 for M); decoding additionally accepts the EWKB
/// high-bit flags so that PostGIS-flavored producers round-trip.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, SerializeDisplay, DeserializeFromStr)]
pub struct GeometryCode {
    geometry_type: GeometryTypeId,
    dimensions: Dimensions,
}

impl GeometryCode {
    /// Create from [GeometryTypeId] and [Dimensions]
    pub fn new(geometry_type: GeometryTypeId, dimensions: Dimensions) -> Self {
        Self {
            geometry_type,
            dimensions,
        }
    }

    /// The code for a stored geometry, from its type and dimensions
    pub fn for_geometry(geometry: &Geometry) -> Self {
        Self::new(geometry.geometry_type(), geometry.dimensions())
    }

    /// The [GeometryTypeId]
    pub fn geometry_type(&self) -> GeometryTypeId {
        self.geometry_type
    }

    /// The [Dimensions]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// The ISO WKB type code (e.g., 1001 for Point Z)
    pub fn to_u32(&self) -> u32 {
        let dimensions_id = match self.dimensions {
            Dimensions::Xy => 0,
            Dimensions::Xyz => 1000,
            Dimensions::Xym => 2000,
            Dimensions::Xyzm => 3000,
            Dimensions::Unknown(n) => match n {
                2 => 0,
                3 => 1000,
                4 => 3000,
                _ => {
                    // Avoid a panic unless in debug mode
                    debug_assert!(false, "Unknown dimensions in GeometryCode");
                    0
                }
            },
        };

        dimensions_id + self.geometry_type.wkb_id()
    }

    /// Decode a raw 32-bit type code
    ///
    /// Handles both the ISO additive Z/M offsets and the EWKB flag bits;
    /// an EWKB SRID flag is ignored here (consuming the SRID itself is the
    /// reader's concern).
    pub fn try_from_u32(raw: u32) -> Result<Self, KarstGeometryError> {
        let code = raw & !SRID_FLAG_BIT;
        let flag_z = code & Z_FLAG_BIT != 0;
        let flag_m = code & M_FLAG_BIT != 0;
        let base = code & !(Z_FLAG_BIT | M_FLAG_BIT);

        let (dimensions, base) = match (flag_z, flag_m) {
            (true, false) => (Dimensions::Xyz, base),
            (false, true) => (Dimensions::Xym, base),
            (true, true) => (Dimensions::Xyzm, base),
            (false, false) => {
                let dimensions = match base / 1000 {
                    0 => Dimensions::Xy,
                    1 => Dimensions::Xyz,
                    2 => Dimensions::Xym,
                    3 => Dimensions::Xyzm,
                    _ => return Err(KarstGeometryError::UnknownTypeCode(raw)),
                };
                (dimensions, base % 1000)
            }
        };

        let geometry_type = GeometryTypeId::try_from_wkb_id(base)
            .map_err(|_| KarstGeometryError::UnknownTypeCode(raw))?;
        Ok(Self {
            geometry_type,
            dimensions,
        })
    }
}

impl From<(GeometryTypeId, Dimensions)> for GeometryCode {
    fn from(value: (GeometryTypeId, Dimensions)) -> Self {
        Self {
            geometry_type: value.0,
            dimensions: value.1,
        }
    }
}

impl Display for GeometryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = match self.dimensions {
            Dimensions::Xy => "",
            Dimensions::Xyz => " Z",
            Dimensions::Xym => " M",
            Dimensions::Xyzm => " ZM",
            Dimensions::Unknown(_) => " Unknown",
        };

        f.write_str(self.geometry_type.name())?;
        f.write_str(suffix)
    }
}

impl FromStr for GeometryCode {
    type Err = KarstGeometryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split_ascii_whitespace();
        let geometry_type = match parts.next() {
            Some(maybe_geometry_type) => GeometryTypeId::from_str(maybe_geometry_type)?,
            None => {
                return Err(KarstGeometryError::Invalid(format!(
                    "Invalid geometry code string: '{value}'"
                )))
            }
        };

        let dimensions = match parts.next() {
            Some(maybe_dimensions) => match maybe_dimensions {
                "z" | "Z" => Dimensions::Xyz,
                "m" | "M" => Dimensions::Xym,
                "zm" | "ZM" => Dimensions::Xyzm,
                _ => {
                    return Err(KarstGeometryError::Invalid(format!(
                        "invalid geometry code string: '{value}'"
                    )))
                }
            },
            None => Dimensions::Xy,
        };

        if parts.next().is_some() {
            return Err(KarstGeometryError::Invalid(format!(
                "invalid geometry code string: '{value}'"
            )));
        }

        Ok(Self {
            geometry_type,
            dimensions,
        })
    }
}
