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
use crate::geometry::Point;

/// Numeric classes a [PointFiniteFilter] accepts
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FiniteFilterKind {
    /// Only finite ordinates
    #[default]
    Finite,
    /// Finite or NaN ordinates (infinities rejected)
    FiniteAndNan,
    /// Finite or infinite ordinates (NaN rejected)
    FiniteAndInfinite,
}

/// A per-point predicate consulted while reading
///
/// Points whose tested ordinates fall outside the configured numeric class
/// are dropped from their container rather than surfaced as errors. X and Y
/// are always tested; Z and M only when enabled and present on the point.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct PointFiniteFilter {
    kind: FiniteFilterKind,
    filter_z: bool,
    filter_m: bool,
}

impl PointFiniteFilter {
    pub fn new(kind: FiniteFilterKind) -> Self {
        Self {
            kind,
            filter_z: false,
            filter_m: false,
        }
    }

    /// Also test the Z ordinate of points that carry one
    pub fn filter_z(mut self, filter_z: bool) -> Self {
        self.filter_z = filter_z;
        self
    }

    /// Also test the M ordinate of points that carry one
    pub fn filter_m(mut self, filter_m: bool) -> Self {
        self.filter_m = filter_m;
        self
    }

    pub fn kind(&self) -> FiniteFilterKind {
        self.kind
    }

    /// Whether every tested ordinate of the point is in the accepted class
    pub fn accept(&self, point: &Point) -> bool {
        if !self.accepts_value(point.x()) || !self.accepts_value(point.y()) {
            return false;
        }
        if self.filter_z {
            if let Some(z) = point.z() {
                if !self.accepts_value(z) {
                    return false;
                }
            }
        }
        if self.filter_m {
            if let Some(m) = point.m() {
                if !self.accepts_value(m) {
                    return false;
                }
            }
        }
        true
    }

    fn accepts_value(&self, value: f64) -> bool {
        match self.kind {
            FiniteFilterKind::Finite => value.is_finite(),
            FiniteFilterKind::FiniteAndNan => value.is_finite() || value.is_nan(),
            FiniteFilterKind::FiniteAndInfinite => value.is_finite() || value.is_infinite(),
        }
    }
}
