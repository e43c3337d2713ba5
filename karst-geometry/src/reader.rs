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

//! Recursive well-known binary decoder
//!
//! Every record starts with its own byte-order marker and type code, so a
//! container written in one order may hold children written in the other.
//! The order passed to [read_geometry] is only the cursor's initial state;
//! the outermost record header immediately replaces it.

use geo_traits::Dimensions;

use crate::error::KarstGeometryError;
use crate::filter::PointFiniteFilter;
use crate::geometry::{
    CircularString, CompoundCurve, Curve, CurvePolygon, CurveRing, Geometry, GeometryCollection,
    LineString, MultiLineString, MultiPoint, MultiPolygon, Point, PolyhedralSurface, Polygon, Tin,
    Triangle,
};
use crate::types::{
    dims_have_m, dims_have_z, ByteOrder, GeometryCode, GeometryTypeId, SRID_FLAG_BIT,
};

/// Default cap on record nesting, guarding the stack against hostile input
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A byte buffer with a position cursor and a current byte order
///
/// Multibyte reads honor the cursor's byte order, which each WKB record
/// header switches via [read_byte_order](Self::read_byte_order).
#[derive(Debug)]
pub struct WkbCursor<'a> {
    buf: &'a [u8],
    offset: usize,
    byte_order: ByteOrder,
}

impl<'a> WkbCursor<'a> {
    pub fn new(buf: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            buf,
            offset: 0,
            byte_order,
        }
    }

    /// Bytes left between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// The order used for subsequent multibyte reads
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], KarstGeometryError> {
        if self.remaining() < len {
            return Err(KarstGeometryError::Truncated {
                offset: self.offset,
                needed: len - self.remaining(),
            });
        }
        let out = &self.buf[self.offset..self.offset + len];
        self.offset += len;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, KarstGeometryError> {
        Ok(self.take(1)?[0])
    }

    /// Read a record's byte-order marker and switch to the declared order
    pub fn read_byte_order(&mut self) -> Result<ByteOrder, KarstGeometryError> {
        if self.remaining() == 0 {
            return Err(KarstGeometryError::MalformedHeader(format!(
                "buffer too short for a record header at offset {}",
                self.offset
            )));
        }
        let marker = self.buf[self.offset];
        self.offset += 1;
        let byte_order = ByteOrder::try_from_marker(marker)?;
        self.byte_order = byte_order;
        Ok(byte_order)
    }

    pub fn read_u32(&mut self) -> Result<u32, KarstGeometryError> {
        let bytes = self.take(4)?;
        let bytes = [bytes[0], bytes[1], bytes[2], bytes[3]];
        Ok(match self.byte_order {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        })
    }

    pub fn read_i32(&mut self) -> Result<i32, KarstGeometryError> {
        let bytes = self.take(4)?;
        let bytes = [bytes[0], bytes[1], bytes[2], bytes[3]];
        Ok(match self.byte_order {
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
        })
    }

    pub fn read_f64(&mut self) -> Result<f64, KarstGeometryError> {
        let bytes = self.take(8)?;
        let bytes = [
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ];
        Ok(match self.byte_order {
            ByteOrder::BigEndian => f64::from_be_bytes(bytes),
            ByteOrder::LittleEndian => f64::from_le_bytes(bytes),
        })
    }
}

/// Knobs for a decoding pass
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Drop points failing this predicate instead of storing them
    pub filter: Option<PointFiniteFilter>,
    /// Cap on record nesting; zero means [DEFAULT_MAX_DEPTH]
    pub max_depth: usize,
}

impl ReadOptions {
    fn max_depth(&self) -> usize {
        if self.max_depth == 0 {
            DEFAULT_MAX_DEPTH
        } else {
            self.max_depth
        }
    }
}

/// Decode one geometry from a WKB buffer
///
/// `byte_order` is only the cursor's initial state; each record declares its
/// own order. Use [read_geometry_with] to filter points while reading.
pub fn read_geometry(
    buf: &[u8],
    byte_order: ByteOrder,
) -> Result<Option<Geometry>, KarstGeometryError> {
    read_geometry_with(buf, byte_order, &ReadOptions::default())
}

/// Decode one geometry, optionally filtering points
///
/// Returns `Ok(None)` when the configured filter drops the root record
/// (directly, or by emptying every container beneath it).
pub fn read_geometry_with(
    buf: &[u8],
    byte_order: ByteOrder,
    options: &ReadOptions,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let mut cursor = WkbCursor::new(buf, byte_order);
    read_record(&mut cursor, options, 0)
}

/// Whether filtering emptied a container that held children on the wire
fn filtered_out(options: &ReadOptions, wire_count: u32, kept: usize) -> bool {
    options.filter.is_some() && wire_count > 0 && kept == 0
}

fn invalid_child(parent: GeometryTypeId, child: &Geometry) -> KarstGeometryError {
    KarstGeometryError::InvalidChildType {
        parent,
        child: child.geometry_type(),
    }
}

fn read_record(
    cursor: &mut WkbCursor,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    if depth >= options.max_depth() {
        return Err(KarstGeometryError::MalformedHeader(format!(
            "geometry nesting exceeds {} levels",
            options.max_depth()
        )));
    }

    cursor.read_byte_order()?;
    let raw_code = cursor.read_u32()?;
    if raw_code & SRID_FLAG_BIT != 0 {
        // EWKB SRID; coordinate reference handling lives outside the codec
        cursor.read_u32()?;
    }
    let code = GeometryCode::try_from_u32(raw_code)?;
    let dims = code.dimensions();

    match code.geometry_type() {
        GeometryTypeId::Point => read_point(cursor, dims, options),
        GeometryTypeId::LineString => read_line_string(cursor, dims, options),
        GeometryTypeId::CircularString => read_circular_string(cursor, dims, options),
        GeometryTypeId::Polygon => read_polygon(cursor, dims, options),
        GeometryTypeId::Triangle => read_triangle(cursor, dims, options),
        GeometryTypeId::CompoundCurve => read_compound_curve(cursor, dims, options, depth),
        GeometryTypeId::CurvePolygon => read_curve_polygon(cursor, dims, options, depth),
        GeometryTypeId::MultiPoint => read_multi_point(cursor, dims, options, depth),
        GeometryTypeId::MultiLineString => read_multi_line_string(cursor, dims, options, depth),
        GeometryTypeId::MultiPolygon => read_multi_polygon(cursor, dims, options, depth),
        GeometryTypeId::PolyhedralSurface => read_polyhedral_surface(cursor, dims, options, depth),
        GeometryTypeId::Tin => read_tin(cursor, dims, options, depth),
        // The abstract multi-collections materialize as plain collections;
        // the children's types preserve their identity
        GeometryTypeId::GeometryCollection
        | GeometryTypeId::MultiCurve
        | GeometryTypeId::MultiSurface => read_collection(cursor, dims, options, depth),
        GeometryTypeId::Geometry | GeometryTypeId::Curve | GeometryTypeId::Surface => {
            Err(KarstGeometryError::Invalid(format!(
                "abstract geometry type code {raw_code:#010x} cannot be decoded into a value"
            )))
        }
    }
}

/// Read one full child record, restoring the parent's byte order afterwards
fn read_child(
    cursor: &mut WkbCursor,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let parent_order = cursor.byte_order();
    let child = read_record(cursor, options, depth + 1);
    cursor.set_byte_order(parent_order);
    child
}

/// Read one bare coordinate tuple in the enclosing record's order
fn read_coord(cursor: &mut WkbCursor, dims: Dimensions) -> Result<Point, KarstGeometryError> {
    let x = cursor.read_f64()?;
    let y = cursor.read_f64()?;
    let z = if dims_have_z(dims) {
        Some(cursor.read_f64()?)
    } else {
        None
    };
    let m = if dims_have_m(dims) {
        Some(cursor.read_f64()?)
    } else {
        None
    };
    Ok(Point::new(x, y, z, m))
}

fn read_point(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let point = read_coord(cursor, dims)?;
    if let Some(filter) = &options.filter {
        if !filter.accept(&point) {
            return Ok(None);
        }
    }
    Ok(Some(point.into()))
}

/// Read a count-prefixed run of bare coordinate tuples
///
/// Returns the wire count alongside the surviving points so callers can tell
/// a container emptied by filtering from one that was empty on the wire.
fn read_bare_points(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<(u32, Vec<Point>), KarstGeometryError> {
    let num_points = cursor.read_u32()?;
    let mut points = Vec::new();
    for _ in 0..num_points {
        let point = read_coord(cursor, dims)?;
        match &options.filter {
            Some(filter) if !filter.accept(&point) => {}
            _ => points.push(point),
        }
    }
    Ok((num_points, points))
}

fn read_line_string(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let (wire_count, points) = read_bare_points(cursor, dims, options)?;
    if filtered_out(options, wire_count, points.len()) {
        return Ok(None);
    }
    Ok(Some(LineString::try_new(dims, points)?.into()))
}

fn read_circular_string(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let (wire_count, points) = read_bare_points(cursor, dims, options)?;
    if filtered_out(options, wire_count, points.len()) {
        return Ok(None);
    }
    Ok(Some(CircularString::try_new(dims, points)?.into()))
}

/// Read a count-prefixed run of bare rings, dropping rings emptied by the
/// filter
fn read_rings(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<(u32, Vec<LineString>), KarstGeometryError> {
    let num_rings = cursor.read_u32()?;
    let mut rings = Vec::new();
    for _ in 0..num_rings {
        let (wire_count, points) = read_bare_points(cursor, dims, options)?;
        if filtered_out(options, wire_count, points.len()) {
            continue;
        }
        rings.push(LineString::try_new(dims, points)?);
    }
    Ok((num_rings, rings))
}

fn read_polygon(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let (wire_count, rings) = read_rings(cursor, dims, options)?;
    if filtered_out(options, wire_count, rings.len()) {
        return Ok(None);
    }
    Ok(Some(Polygon::try_new(dims, rings)?.into()))
}

fn read_triangle(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let (wire_count, rings) = read_rings(cursor, dims, options)?;
    if filtered_out(options, wire_count, rings.len()) {
        return Ok(None);
    }
    Ok(Some(Triangle::try_new(dims, rings)?.into()))
}

fn read_compound_curve(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_segments = cursor.read_u32()?;
    let mut compound = CompoundCurve::empty(dims);
    for _ in 0..num_segments {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::LineString(ls)) => compound.push_segment(Curve::LineString(ls))?,
            Some(Geometry::CircularString(cs)) => {
                compound.push_segment(Curve::CircularString(cs))?
            }
            Some(other) => return Err(invalid_child(GeometryTypeId::CompoundCurve, &other)),
        }
    }
    if filtered_out(options, num_segments, compound.num_segments()) {
        return Ok(None);
    }
    Ok(Some(compound.into()))
}

fn read_curve_polygon(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_rings = cursor.read_u32()?;
    let mut curve_polygon = CurvePolygon::empty(dims);
    for _ in 0..num_rings {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::LineString(ls)) => {
                curve_polygon.push_ring(CurveRing::LineString(ls))?
            }
            Some(Geometry::CircularString(cs)) => {
                curve_polygon.push_ring(CurveRing::CircularString(cs))?
            }
            Some(Geometry::CompoundCurve(cc)) => {
                curve_polygon.push_ring(CurveRing::CompoundCurve(cc))?
            }
            Some(other) => return Err(invalid_child(GeometryTypeId::CurvePolygon, &other)),
        }
    }
    if filtered_out(options, num_rings, curve_polygon.num_rings()) {
        return Ok(None);
    }
    Ok(Some(curve_polygon.into()))
}

fn read_multi_point(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_points = cursor.read_u32()?;
    let mut multi_point = MultiPoint::empty(dims);
    for _ in 0..num_points {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::Point(point)) => multi_point.push_point(point)?,
            Some(other) => return Err(invalid_child(GeometryTypeId::MultiPoint, &other)),
        }
    }
    if filtered_out(options, num_points, multi_point.num_points()) {
        return Ok(None);
    }
    Ok(Some(multi_point.into()))
}

fn read_multi_line_string(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_line_strings = cursor.read_u32()?;
    let mut multi_line_string = MultiLineString::empty(dims);
    for _ in 0..num_line_strings {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::LineString(ls)) => multi_line_string.push_line_string(ls)?,
            Some(other) => return Err(invalid_child(GeometryTypeId::MultiLineString, &other)),
        }
    }
    if filtered_out(options, num_line_strings, multi_line_string.num_line_strings()) {
        return Ok(None);
    }
    Ok(Some(multi_line_string.into()))
}

fn read_multi_polygon(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_polygons = cursor.read_u32()?;
    let mut multi_polygon = MultiPolygon::empty(dims);
    for _ in 0..num_polygons {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::Polygon(polygon)) => multi_polygon.push_polygon(polygon)?,
            Some(other) => return Err(invalid_child(GeometryTypeId::MultiPolygon, &other)),
        }
    }
    if filtered_out(options, num_polygons, multi_polygon.num_polygons()) {
        return Ok(None);
    }
    Ok(Some(multi_polygon.into()))
}

fn read_polyhedral_surface(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_patches = cursor.read_u32()?;
    let mut surface = PolyhedralSurface::empty(dims);
    for _ in 0..num_patches {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::Polygon(polygon)) => surface.push_patch(polygon)?,
            Some(other) => return Err(invalid_child(GeometryTypeId::PolyhedralSurface, &other)),
        }
    }
    if filtered_out(options, num_patches, surface.num_patches()) {
        return Ok(None);
    }
    Ok(Some(surface.into()))
}

fn read_tin(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_triangles = cursor.read_u32()?;
    let mut tin = Tin::empty(dims);
    for _ in 0..num_triangles {
        match read_child(cursor, options, depth)? {
            None => {}
            Some(Geometry::Triangle(triangle)) => tin.push_triangle(triangle)?,
            Some(other) => return Err(invalid_child(GeometryTypeId::Tin, &other)),
        }
    }
    if filtered_out(options, num_triangles, tin.num_triangles()) {
        return Ok(None);
    }
    Ok(Some(tin.into()))
}

fn read_collection(
    cursor: &mut WkbCursor,
    dims: Dimensions,
    options: &ReadOptions,
    depth: usize,
) -> Result<Option<Geometry>, KarstGeometryError> {
    let num_geometries = cursor.read_u32()?;
    let mut collection = GeometryCollection::empty(dims);
    for _ in 0..num_geometries {
        if let Some(child) = read_child(cursor, options, depth)? {
            collection.push_geometry(child)?;
        }
    }
    if filtered_out(options, num_geometries, collection.num_geometries()) {
        return Ok(None);
    }
    Ok(Some(collection.into()))
}
