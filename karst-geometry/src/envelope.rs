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
use geo_traits::Dimensions;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::interval::Interval;
use crate::types::{dims_have_m, dims_have_z};

/// Axis-aligned minimum bounding box over the coordinates of a geometry
///
/// Conceptually an [Interval] per axis. The z and m intervals are `Some`
/// exactly when the source geometry carries those dimensions; an interval
/// that is present but [empty](Interval::is_empty) means the dimension
/// exists and no finite value was observed for it. Two envelopes compare
/// equal iff all bounds are equal and the same dimensions are present.
///
/// This structure implements Serialize and Deserialize so bounds can be
/// passed between components that exchange metadata as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    x: Interval,
    y: Interval,
    z: Option<Interval>,
    m: Option<Interval>,
}

impl Envelope {
    /// Create an Envelope without z and m intervals
    pub fn xy(x: impl Into<Interval>, y: impl Into<Interval>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: None,
            m: None,
        }
    }

    /// Create an Envelope from intervals by dimension
    pub fn xyzm(
        x: impl Into<Interval>,
        y: impl Into<Interval>,
        z: Option<Interval>,
        m: Option<Interval>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z,
            m,
        }
    }

    /// The all-empty envelope carrying the axes of the given dimensions
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            x: Interval::empty(),
            y: Interval::empty(),
            z: dims_have_z(dimensions).then(Interval::empty),
            m: dims_have_m(dimensions).then(Interval::empty),
        }
    }

    /// The x interval
    pub fn x(&self) -> &Interval {
        &self.x
    }

    /// The y interval
    pub fn y(&self) -> &Interval {
        &self.y
    }

    /// The z interval, or `None` when the geometry has no Z dimension
    pub fn z(&self) -> &Option<Interval> {
        &self.z
    }

    /// The m interval, or `None` when the geometry has no M dimension
    pub fn m(&self) -> &Option<Interval> {
        &self.m
    }

    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    pub fn has_m(&self) -> bool {
        self.m.is_some()
    }

    /// Widen this envelope to include a point's ordinates
    ///
    /// NaN ordinates are skipped by the underlying intervals. A z or m
    /// ordinate only contributes when the envelope tracks that axis.
    pub fn update_point(&mut self, point: &Point) {
        self.x.update_value(point.x());
        self.y.update_value(point.y());
        if let (Some(z_interval), Some(z)) = (self.z.as_mut(), point.z()) {
            z_interval.update_value(z);
        }
        if let (Some(m_interval), Some(m)) = (self.m.as_mut(), point.m()) {
            m_interval.update_value(m);
        }
    }
}
