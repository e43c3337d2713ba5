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

//! The geometry object model
//!
//! One owned struct per concrete Simple Features type plus the [Geometry]
//! tagged union over all of them. Every value carries its [Dimensions]; the
//! builder operations reject children whose dimensions disagree with their
//! container, so any point reachable from a geometry shares the root's
//! dimensions.

use geo_traits::Dimensions;

use crate::bounds::geometry_envelope;
use crate::envelope::Envelope;
use crate::error::KarstGeometryError;
use crate::types::GeometryTypeId;

fn check_child_dimensions(
    expected: Dimensions,
    actual: Dimensions,
    child: &str,
) -> Result<(), KarstGeometryError> {
    if expected != actual {
        return Err(KarstGeometryError::DimensionMismatch(format!(
            "{child} with dimensions {actual:?} cannot be added to a container with dimensions {expected:?}"
        )));
    }
    Ok(())
}

/// A single coordinate tuple with optional Z and M ordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    z: Option<f64>,
    m: Option<f64>,
}

impl Point {
    /// Create an XY point
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, None, None)
    }

    /// Create an XYZ point
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, Some(z), None)
    }

    /// Create an XYM point
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self::new(x, y, None, Some(m))
    }

    /// Create an XYZM point
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self::new(x, y, Some(z), Some(m))
    }

    /// Create from x, y, and optional z and m ordinates
    pub fn new(x: f64, y: f64, z: Option<f64>, m: Option<f64>) -> Self {
        Self { x, y, z, m }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.z
    }

    pub fn m(&self) -> Option<f64> {
        self.m
    }

    /// Dimensions implied by the present ordinates
    pub fn dimensions(&self) -> Dimensions {
        match (self.z.is_some(), self.m.is_some()) {
            (false, false) => Dimensions::Xy,
            (true, false) => Dimensions::Xyz,
            (false, true) => Dimensions::Xym,
            (true, true) => Dimensions::Xyzm,
        }
    }

    /// Whether this point is the conventional NaN/NaN encoding of POINT EMPTY
    pub fn is_empty(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }
}

/// A sequence of points joined by straight segments
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    dimensions: Dimensions,
    points: Vec<Point>,
}

impl LineString {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            points: Vec::new(),
        }
    }

    pub fn try_new(dimensions: Dimensions, points: Vec<Point>) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for point in points {
            out.push(point)?;
        }
        Ok(out)
    }

    pub fn push(&mut self, point: Point) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, point.dimensions(), "Point")?;
        self.points.push(point);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, i: usize) -> Option<&Point> {
        self.points.get(i)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A sequence of points interpreted as consecutive circular arcs
#[derive(Debug, Clone, PartialEq)]
pub struct CircularString {
    dimensions: Dimensions,
    points: Vec<Point>,
}

impl CircularString {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            points: Vec::new(),
        }
    }

    pub fn try_new(dimensions: Dimensions, points: Vec<Point>) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for point in points {
            out.push(point)?;
        }
        Ok(out)
    }

    pub fn push(&mut self, point: Point) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, point.dimensions(), "Point")?;
        self.points.push(point);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, i: usize) -> Option<&Point> {
        self.points.get(i)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A polygon bounded by straight-edged rings, exterior ring first
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    dimensions: Dimensions,
    rings: Vec<LineString>,
}

impl Polygon {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            rings: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        rings: Vec<LineString>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for ring in rings {
            out.push_ring(ring)?;
        }
        Ok(out)
    }

    pub fn push_ring(&mut self, ring: LineString) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, ring.dimensions(), "LineString ring")?;
        self.rings.push(ring);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn ring(&self, i: usize) -> Option<&LineString> {
        self.rings.get(i)
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// A polygon restricted to a single ring of four points
///
/// The codec does not validate closure or the point count; a Triangle is a
/// Polygon that encodes under its own type code.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    dimensions: Dimensions,
    rings: Vec<LineString>,
}

impl Triangle {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            rings: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        rings: Vec<LineString>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for ring in rings {
            out.push_ring(ring)?;
        }
        Ok(out)
    }

    pub fn push_ring(&mut self, ring: LineString) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, ring.dimensions(), "LineString ring")?;
        self.rings.push(ring);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn ring(&self, i: usize) -> Option<&LineString> {
        self.rings.get(i)
    }

    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// A curve segment permitted inside a [CompoundCurve]
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    LineString(LineString),
    CircularString(CircularString),
}

impl Curve {
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Self::LineString(_) => GeometryTypeId::LineString,
            Self::CircularString(_) => GeometryTypeId::CircularString,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::LineString(ls) => ls.dimensions(),
            Self::CircularString(cs) => cs.dimensions(),
        }
    }

    pub fn num_points(&self) -> usize {
        match self {
            Self::LineString(ls) => ls.num_points(),
            Self::CircularString(cs) => cs.num_points(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_points() == 0
    }
}

/// A contiguous sequence of straight and circular segments
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundCurve {
    dimensions: Dimensions,
    segments: Vec<Curve>,
}

impl CompoundCurve {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            segments: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        segments: Vec<Curve>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for segment in segments {
            out.push_segment(segment)?;
        }
        Ok(out)
    }

    pub fn push_segment(&mut self, segment: Curve) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, segment.dimensions(), "Curve segment")?;
        self.segments.push(segment);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, i: usize) -> Option<&Curve> {
        self.segments.get(i)
    }

    pub fn segments(&self) -> &[Curve] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A ring permitted inside a [CurvePolygon]
#[derive(Debug, Clone, PartialEq)]
pub enum CurveRing {
    LineString(LineString),
    CircularString(CircularString),
    CompoundCurve(CompoundCurve),
}

impl CurveRing {
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Self::LineString(_) => GeometryTypeId::LineString,
            Self::CircularString(_) => GeometryTypeId::CircularString,
            Self::CompoundCurve(_) => GeometryTypeId::CompoundCurve,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::LineString(ls) => ls.dimensions(),
            Self::CircularString(cs) => cs.dimensions(),
            Self::CompoundCurve(cc) => cc.dimensions(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::LineString(ls) => ls.is_empty(),
            Self::CircularString(cs) => cs.is_empty(),
            Self::CompoundCurve(cc) => cc.is_empty(),
        }
    }
}

/// A polygon whose rings may be straight, circular, or compound curves
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePolygon {
    dimensions: Dimensions,
    rings: Vec<CurveRing>,
}

impl CurvePolygon {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            rings: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        rings: Vec<CurveRing>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for ring in rings {
            out.push_ring(ring)?;
        }
        Ok(out)
    }

    pub fn push_ring(&mut self, ring: CurveRing) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, ring.dimensions(), "Curve ring")?;
        self.rings.push(ring);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn ring(&self, i: usize) -> Option<&CurveRing> {
        self.rings.get(i)
    }

    pub fn rings(&self) -> &[CurveRing] {
        &self.rings
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

/// An unordered-in-meaning, ordered-in-encoding set of points
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    dimensions: Dimensions,
    points: Vec<Point>,
}

impl MultiPoint {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            points: Vec::new(),
        }
    }

    pub fn try_new(dimensions: Dimensions, points: Vec<Point>) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for point in points {
            out.push_point(point)?;
        }
        Ok(out)
    }

    pub fn push_point(&mut self, point: Point) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, point.dimensions(), "Point")?;
        self.points.push(point);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn point(&self, i: usize) -> Option<&Point> {
        self.points.get(i)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    dimensions: Dimensions,
    line_strings: Vec<LineString>,
}

impl MultiLineString {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            line_strings: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        line_strings: Vec<LineString>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for line_string in line_strings {
            out.push_line_string(line_string)?;
        }
        Ok(out)
    }

    pub fn push_line_string(&mut self, line_string: LineString) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, line_string.dimensions(), "LineString")?;
        self.line_strings.push(line_string);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn line_string(&self, i: usize) -> Option<&LineString> {
        self.line_strings.get(i)
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    dimensions: Dimensions,
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            polygons: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        polygons: Vec<Polygon>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for polygon in polygons {
            out.push_polygon(polygon)?;
        }
        Ok(out)
    }

    pub fn push_polygon(&mut self, polygon: Polygon) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, polygon.dimensions(), "Polygon")?;
        self.polygons.push(polygon);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.polygons.get(i)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

/// A surface stitched together from polygonal patches
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedralSurface {
    dimensions: Dimensions,
    patches: Vec<Polygon>,
}

impl PolyhedralSurface {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            patches: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        patches: Vec<Polygon>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for patch in patches {
            out.push_patch(patch)?;
        }
        Ok(out)
    }

    pub fn push_patch(&mut self, patch: Polygon) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, patch.dimensions(), "Polygon patch")?;
        self.patches.push(patch);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_patches(&self) -> usize {
        self.patches.len()
    }

    pub fn patch(&self, i: usize) -> Option<&Polygon> {
        self.patches.get(i)
    }

    pub fn patches(&self) -> &[Polygon] {
        &self.patches
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}

/// A triangulated irregular network
#[derive(Debug, Clone, PartialEq)]
pub struct Tin {
    dimensions: Dimensions,
    triangles: Vec<Triangle>,
}

impl Tin {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            triangles: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        triangles: Vec<Triangle>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for triangle in triangles {
            out.push_triangle(triangle)?;
        }
        Ok(out)
    }

    pub fn push_triangle(&mut self, triangle: Triangle) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, triangle.dimensions(), "Triangle")?;
        self.triangles.push(triangle);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn triangle(&self, i: usize) -> Option<&Triangle> {
        self.triangles.get(i)
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// A heterogeneous, ordered collection of geometries
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    dimensions: Dimensions,
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            geometries: Vec::new(),
        }
    }

    pub fn try_new(
        dimensions: Dimensions,
        geometries: Vec<Geometry>,
    ) -> Result<Self, KarstGeometryError> {
        let mut out = Self::empty(dimensions);
        for geometry in geometries {
            out.push_geometry(geometry)?;
        }
        Ok(out)
    }

    pub fn push_geometry(&mut self, geometry: Geometry) -> Result<(), KarstGeometryError> {
        check_child_dimensions(self.dimensions, geometry.dimensions(), "Geometry")?;
        self.geometries.push(geometry);
        Ok(())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn geometry(&self, i: usize) -> Option<&Geometry> {
        self.geometries.get(i)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Whether every child is a curve (LineString, CircularString, or
    /// CompoundCurve), which makes this collection a MultiCurve in the
    /// abstract type hierarchy. Vacuously true when empty.
    pub fn is_multi_curve(&self) -> bool {
        self.geometries.iter().all(|g| {
            matches!(
                g,
                Geometry::LineString(_) | Geometry::CircularString(_) | Geometry::CompoundCurve(_)
            )
        })
    }

    /// Whether every child is a surface (Polygon, CurvePolygon, or Triangle),
    /// which makes this collection a MultiSurface in the abstract type
    /// hierarchy. Vacuously true when empty.
    pub fn is_multi_surface(&self) -> bool {
        self.geometries.iter().all(|g| {
            matches!(
                g,
                Geometry::Polygon(_) | Geometry::CurvePolygon(_) | Geometry::Triangle(_)
            )
        })
    }
}

/// View of a [GeometryCollection] that encodes under its abstract type code
///
/// Writing a plain collection always emits the GeometryCollection code;
/// wrapping it in this type re-emits the identical children under the
/// MultiCurve or MultiSurface code, preserving the abstract typing for
/// consumers that distinguish the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedGeometryCollection<'a> {
    collection: &'a GeometryCollection,
    abstract_type: GeometryTypeId,
}

impl<'a> ExtendedGeometryCollection<'a> {
    /// Wrap a collection, deriving the abstract code from its children
    ///
    /// Curves win when the collection satisfies both predicates (the empty
    /// collection does).
    pub fn try_new(collection: &'a GeometryCollection) -> Result<Self, KarstGeometryError> {
        if collection.is_multi_curve() {
            Ok(Self {
                collection,
                abstract_type: GeometryTypeId::MultiCurve,
            })
        } else if collection.is_multi_surface() {
            Ok(Self {
                collection,
                abstract_type: GeometryTypeId::MultiSurface,
            })
        } else {
            let child = collection
                .geometries()
                .iter()
                .map(Geometry::geometry_type)
                .find(|t| {
                    !matches!(
                        t,
                        GeometryTypeId::LineString
                            | GeometryTypeId::CircularString
                            | GeometryTypeId::CompoundCurve
                    )
                })
                .unwrap_or(GeometryTypeId::Geometry);
            Err(KarstGeometryError::InvalidChildType {
                parent: GeometryTypeId::MultiCurve,
                child,
            })
        }
    }

    /// The MultiCurve or MultiSurface identity used when encoding
    pub fn abstract_type(&self) -> GeometryTypeId {
        self.abstract_type
    }

    pub fn collection(&self) -> &GeometryCollection {
        self.collection
    }
}

/// Any concrete geometry value
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    CircularString(CircularString),
    Polygon(Polygon),
    Triangle(Triangle),
    CompoundCurve(CompoundCurve),
    CurvePolygon(CurvePolygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    PolyhedralSurface(PolyhedralSurface),
    Tin(Tin),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Self::Point(_) => GeometryTypeId::Point,
            Self::LineString(_) => GeometryTypeId::LineString,
            Self::CircularString(_) => GeometryTypeId::CircularString,
            Self::Polygon(_) => GeometryTypeId::Polygon,
            Self::Triangle(_) => GeometryTypeId::Triangle,
            Self::CompoundCurve(_) => GeometryTypeId::CompoundCurve,
            Self::CurvePolygon(_) => GeometryTypeId::CurvePolygon,
            Self::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Self::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Self::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Self::PolyhedralSurface(_) => GeometryTypeId::PolyhedralSurface,
            Self::Tin(_) => GeometryTypeId::Tin,
            Self::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::Point(g) => g.dimensions(),
            Self::LineString(g) => g.dimensions(),
            Self::CircularString(g) => g.dimensions(),
            Self::Polygon(g) => g.dimensions(),
            Self::Triangle(g) => g.dimensions(),
            Self::CompoundCurve(g) => g.dimensions(),
            Self::CurvePolygon(g) => g.dimensions(),
            Self::MultiPoint(g) => g.dimensions(),
            Self::MultiLineString(g) => g.dimensions(),
            Self::MultiPolygon(g) => g.dimensions(),
            Self::PolyhedralSurface(g) => g.dimensions(),
            Self::Tin(g) => g.dimensions(),
            Self::GeometryCollection(g) => g.dimensions(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(g) => g.is_empty(),
            Self::LineString(g) => g.is_empty(),
            Self::CircularString(g) => g.is_empty(),
            Self::Polygon(g) => g.is_empty(),
            Self::Triangle(g) => g.is_empty(),
            Self::CompoundCurve(g) => g.is_empty(),
            Self::CurvePolygon(g) => g.is_empty(),
            Self::MultiPoint(g) => g.is_empty(),
            Self::MultiLineString(g) => g.is_empty(),
            Self::MultiPolygon(g) => g.is_empty(),
            Self::PolyhedralSurface(g) => g.is_empty(),
            Self::Tin(g) => g.is_empty(),
            Self::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// The minimum bounding envelope, or `None` for a geometry with no
    /// coordinates
    pub fn envelope(&self) -> Option<Envelope> {
        geometry_envelope(self)
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<CircularString> for Geometry {
    fn from(value: CircularString) -> Self {
        Self::CircularString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Triangle> for Geometry {
    fn from(value: Triangle) -> Self {
        Self::Triangle(value)
    }
}

impl From<CompoundCurve> for Geometry {
    fn from(value: CompoundCurve) -> Self {
        Self::CompoundCurve(value)
    }
}

impl From<CurvePolygon> for Geometry {
    fn from(value: CurvePolygon) -> Self {
        Self::CurvePolygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<PolyhedralSurface> for Geometry {
    fn from(value: PolyhedralSurface) -> Self {
        Self::PolyhedralSurface(value)
    }
}

impl From<Tin> for Geometry {
    fn from(value: Tin) -> Self {
        Self::Tin(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_ring() -> LineString {
        LineString::try_new(
            Dimensions::Xy,
            vec![
                Point::xy(0.0, 0.0),
                Point::xy(1.0, 0.0),
                Point::xy(0.0, 1.0),
                Point::xy(0.0, 0.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn point_dimensions() {
        assert_eq!(Point::xy(1.0, 2.0).dimensions(), Dimensions::Xy);
        assert_eq!(Point::xyz(1.0, 2.0, 3.0).dimensions(), Dimensions::Xyz);
        assert_eq!(Point::xym(1.0, 2.0, 3.0).dimensions(), Dimensions::Xym);
        assert_eq!(
            Point::xyzm(1.0, 2.0, 3.0, 4.0).dimensions(),
            Dimensions::Xyzm
        );

        let pt = Point::xyzm(1.0, 2.0, 3.0, 4.0);
        assert_eq!(pt.x(), 1.0);
        assert_eq!(pt.y(), 2.0);
        assert_eq!(pt.z(), Some(3.0));
        assert_eq!(pt.m(), Some(4.0));
    }

    #[test]
    fn point_empty() {
        assert!(Point::xy(f64::NAN, f64::NAN).is_empty());
        assert!(!Point::xy(f64::NAN, 1.0).is_empty());
        assert!(!Point::xy(0.0, 0.0).is_empty());
    }

    #[test]
    fn line_string_builder() {
        let mut ls = LineString::empty(Dimensions::Xyz);
        assert!(ls.is_empty());

        ls.push(Point::xyz(0.0, 1.0, 2.0)).unwrap();
        ls.push(Point::xyz(3.0, 4.0, 5.0)).unwrap();
        assert_eq!(ls.num_points(), 2);
        assert_eq!(ls.point(0), Some(&Point::xyz(0.0, 1.0, 2.0)));
        assert_eq!(ls.point(2), None);

        let err = ls.push(Point::xy(6.0, 7.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: Point with dimensions Xy cannot be added to a container with dimensions Xyz"
        );
        assert_eq!(ls.num_points(), 2);
    }

    #[test]
    fn polygon_rings() {
        let mut polygon = Polygon::empty(Dimensions::Xy);
        assert!(polygon.exterior().is_none());
        assert!(polygon.interiors().is_empty());

        polygon.push_ring(unit_ring()).unwrap();
        polygon.push_ring(unit_ring()).unwrap();
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.exterior(), Some(&unit_ring()));
        assert_eq!(polygon.interiors().len(), 1);

        let err = polygon
            .push_ring(LineString::empty(Dimensions::Xym))
            .unwrap_err();
        assert!(matches!(err, KarstGeometryError::DimensionMismatch(_)));
    }

    #[test]
    fn compound_curve_segments() {
        let mut cc = CompoundCurve::empty(Dimensions::Xy);
        cc.push_segment(Curve::LineString(
            LineString::try_new(Dimensions::Xy, vec![Point::xy(0.0, 0.0), Point::xy(1.0, 1.0)])
                .unwrap(),
        ))
        .unwrap();
        cc.push_segment(Curve::CircularString(
            CircularString::try_new(
                Dimensions::Xy,
                vec![Point::xy(1.0, 1.0), Point::xy(2.0, 0.0), Point::xy(3.0, 1.0)],
            )
            .unwrap(),
        ))
        .unwrap();

        assert_eq!(cc.num_segments(), 2);
        assert_eq!(
            cc.segment(0).unwrap().geometry_type(),
            GeometryTypeId::LineString
        );
        assert_eq!(
            cc.segment(1).unwrap().geometry_type(),
            GeometryTypeId::CircularString
        );
        assert_eq!(cc.segment(1).unwrap().num_points(), 3);
    }

    #[test]
    fn collection_dimension_consistency() {
        let mut collection = GeometryCollection::empty(Dimensions::Xyz);
        collection
            .push_geometry(Point::xyz(0.0, 1.0, 2.0).into())
            .unwrap();

        let err = collection
            .push_geometry(Point::xy(0.0, 1.0).into())
            .unwrap_err();
        assert!(matches!(err, KarstGeometryError::DimensionMismatch(_)));
        assert_eq!(collection.num_geometries(), 1);
    }

    #[test]
    fn collection_multi_curve_predicate() {
        let ls = LineString::try_new(
            Dimensions::Xy,
            vec![Point::xy(0.0, 0.0), Point::xy(1.0, 1.0)],
        )
        .unwrap();
        let mut collection = GeometryCollection::empty(Dimensions::Xy);

        // Vacuously a multi-curve (and a multi-surface) while empty
        assert!(collection.is_multi_curve());
        assert!(collection.is_multi_surface());

        collection.push_geometry(ls.clone().into()).unwrap();
        collection
            .push_geometry(
                CompoundCurve::try_new(Dimensions::Xy, vec![Curve::LineString(ls)])
                    .unwrap()
                    .into(),
            )
            .unwrap();
        assert!(collection.is_multi_curve());
        assert!(!collection.is_multi_surface());

        collection
            .push_geometry(Point::xy(0.0, 0.0).into())
            .unwrap();
        assert!(!collection.is_multi_curve());
        assert!(!collection.is_multi_surface());
    }

    #[test]
    fn collection_multi_surface_predicate() {
        let mut collection = GeometryCollection::empty(Dimensions::Xy);
        collection
            .push_geometry(Polygon::try_new(Dimensions::Xy, vec![unit_ring()]).unwrap().into())
            .unwrap();
        collection
            .push_geometry(CurvePolygon::empty(Dimensions::Xy).into())
            .unwrap();
        assert!(collection.is_multi_surface());
        assert!(!collection.is_multi_curve());
    }

    #[test]
    fn extended_collection() {
        let ls = LineString::try_new(
            Dimensions::Xy,
            vec![Point::xy(0.0, 0.0), Point::xy(1.0, 1.0)],
        )
        .unwrap();
        let curves = GeometryCollection::try_new(Dimensions::Xy, vec![ls.into()]).unwrap();
        let extended = ExtendedGeometryCollection::try_new(&curves).unwrap();
        assert_eq!(extended.abstract_type(), GeometryTypeId::MultiCurve);
        assert_eq!(extended.collection(), &curves);

        let surfaces = GeometryCollection::try_new(
            Dimensions::Xy,
            vec![Polygon::try_new(Dimensions::Xy, vec![unit_ring()]).unwrap().into()],
        )
        .unwrap();
        let extended = ExtendedGeometryCollection::try_new(&surfaces).unwrap();
        assert_eq!(extended.abstract_type(), GeometryTypeId::MultiSurface);

        let mixed = GeometryCollection::try_new(
            Dimensions::Xy,
            vec![Point::xy(0.0, 0.0).into()],
        )
        .unwrap();
        let err = ExtendedGeometryCollection::try_new(&mixed).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Point is not a valid child of MultiCurve"
        );
    }

    #[test]
    fn geometry_type_and_dimensions() {
        let geometry: Geometry = Point::xyz(0.0, 1.0, 2.0).into();
        assert_eq!(geometry.geometry_type(), GeometryTypeId::Point);
        assert_eq!(geometry.dimensions(), Dimensions::Xyz);

        let geometry: Geometry = Tin::empty(Dimensions::Xym).into();
        assert_eq!(geometry.geometry_type(), GeometryTypeId::Tin);
        assert_eq!(geometry.dimensions(), Dimensions::Xym);
        assert!(geometry.is_empty());
    }
}
