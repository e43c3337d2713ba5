//! Envelope computation folding over a geometry tree

use crate::envelope::Envelope;
use crate::geometry::{Curve, CurveRing, Geometry};

/// Calculate the minimum bounding envelope of a geometry
///
/// Returns `None` for a geometry that contains no coordinate tuples at all
/// (an empty linestring, a collection of empty polygons, ...). A geometry
/// whose coordinates are all NaN still yields an envelope; its intervals are
/// empty but the z/m axes mirror the root's dimensions.
pub fn geometry_envelope(geometry: &Geometry) -> Option<Envelope> {
    let mut envelope = Envelope::empty(geometry.dimensions());
    let mut any_points = false;
    update_envelope(geometry, &mut envelope, &mut any_points);
    any_points.then_some(envelope)
}

fn update_envelope(geometry: &Geometry, envelope: &mut Envelope, any_points: &mut bool) {
    match geometry {
        Geometry::Point(pt) => {
            envelope.update_point(pt);
            *any_points = true;
        }
        Geometry::LineString(ls) => {
            for pt in ls.points() {
                envelope.update_point(pt);
                *any_points = true;
            }
        }
        Geometry::CircularString(cs) => {
            for pt in cs.points() {
                envelope.update_point(pt);
                *any_points = true;
            }
        }
        Geometry::Polygon(pl) => {
            for ring in pl.rings() {
                for pt in ring.points() {
                    envelope.update_point(pt);
                    *any_points = true;
                }
            }
        }
        Geometry::Triangle(tr) => {
            for ring in tr.rings() {
                for pt in ring.points() {
                    envelope.update_point(pt);
                    *any_points = true;
                }
            }
        }
        Geometry::CompoundCurve(cc) => {
            for segment in cc.segments() {
                update_curve_envelope(segment, envelope, any_points);
            }
        }
        Geometry::CurvePolygon(cp) => {
            for ring in cp.rings() {
                match ring {
                    CurveRing::LineString(ls) => {
                        for pt in ls.points() {
                            envelope.update_point(pt);
                            *any_points = true;
                        }
                    }
                    CurveRing::CircularString(cs) => {
                        for pt in cs.points() {
                            envelope.update_point(pt);
                            *any_points = true;
                        }
                    }
                    CurveRing::CompoundCurve(cc) => {
                        for segment in cc.segments() {
                            update_curve_envelope(segment, envelope, any_points);
                        }
                    }
                }
            }
        }
        Geometry::MultiPoint(mp) => {
            for pt in mp.points() {
                envelope.update_point(pt);
                *any_points = true;
            }
        }
        Geometry::MultiLineString(mls) => {
            for ls in mls.line_strings() {
                for pt in ls.points() {
                    envelope.update_point(pt);
                    *any_points = true;
                }
            }
        }
        Geometry::MultiPolygon(mpl) => {
            for pl in mpl.polygons() {
                for ring in pl.rings() {
                    for pt in ring.points() {
                        envelope.update_point(pt);
                        *any_points = true;
                    }
                }
            }
        }
        Geometry::PolyhedralSurface(ps) => {
            for patch in ps.patches() {
                for ring in patch.rings() {
                    for pt in ring.points() {
                        envelope.update_point(pt);
                        *any_points = true;
                    }
                }
            }
        }
        Geometry::Tin(tin) => {
            for triangle in tin.triangles() {
                for ring in triangle.rings() {
                    for pt in ring.points() {
                        envelope.update_point(pt);
                        *any_points = true;
                    }
                }
            }
        }
        Geometry::GeometryCollection(collection) => {
            for child in collection.geometries() {
                update_envelope(child, envelope, any_points);
            }
        }
    }
}

fn update_curve_envelope(curve: &Curve, envelope: &mut Envelope, any_points: &mut bool) {
    let points = match curve {
        Curve::LineString(ls) => ls.points(),
        Curve::CircularString(cs) => cs.points(),
    };
    for pt in points {
        envelope.update_point(pt);
        *any_points = true;
    }
}
