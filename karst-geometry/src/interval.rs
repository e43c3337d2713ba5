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
use serde::{Deserialize, Serialize};

/// A closed one-dimensional interval accumulated from coordinate values
///
/// The empty interval is represented as (inf, -inf) so that folding values
/// into it needs no special case. NaN values are ignored by
/// [update_value](Self::update_value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The interval containing no values
    pub fn empty() -> Self {
        Self {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Widen this interval to include value, ignoring NaN
    pub fn update_value(&mut self, value: f64) {
        if value < self.lo {
            self.lo = value;
        }
        if value > self.hi {
            self.hi = value;
        }
    }

    /// The smallest interval containing both inputs
    pub fn merge_interval(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Into<f64>> From<(T, T)> for Interval {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0.into(), value.1.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_interval() {
        let empty = Interval::empty();
        assert!(empty.is_empty());
        assert!(!Interval::new(0.0, 0.0).is_empty());
        assert_eq!(Interval::default(), empty);
    }

    #[test]
    fn update_value() {
        let mut interval = Interval::empty();
        interval.update_value(3.0);
        assert_eq!(interval, Interval::new(3.0, 3.0));

        interval.update_value(-1.0);
        interval.update_value(7.0);
        assert_eq!(interval, Interval::new(-1.0, 7.0));

        // Values inside the interval leave it unchanged
        interval.update_value(2.0);
        assert_eq!(interval, Interval::new(-1.0, 7.0));
    }

    #[test]
    fn update_value_skips_nan() {
        let mut interval = Interval::empty();
        interval.update_value(f64::NAN);
        assert!(interval.is_empty());

        interval.update_value(5.0);
        interval.update_value(f64::NAN);
        assert_eq!(interval, Interval::new(5.0, 5.0));
    }

    #[test]
    fn update_value_keeps_infinities() {
        let mut interval = Interval::empty();
        interval.update_value(f64::NEG_INFINITY);
        assert_eq!(interval.lo(), f64::NEG_INFINITY);

        interval.update_value(0.0);
        assert_eq!(interval.lo(), f64::NEG_INFINITY);
        assert_eq!(interval.hi(), 0.0);
    }

    #[test]
    fn merge_interval() {
        let a = Interval::new(0.0, 2.0);
        let b = Interval::new(1.0, 5.0);
        assert_eq!(a.merge_interval(&b), Interval::new(0.0, 5.0));

        assert_eq!(a.merge_interval(&Interval::empty()), a);
        assert_eq!(Interval::empty().merge_interval(&b), b);
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Interval::from((0, 2)), Interval::new(0.0, 2.0));
        assert_eq!(Interval::from((0.5, 2.5)), Interval::new(0.5, 2.5));
    }

    #[test]
    fn serialize_deserialize() {
        let interval = Interval::new(10.0 / 17.0, 20.0 / 13.0);
        let json_bytes = serde_json::to_vec(&interval).unwrap();
        let roundtrip: Interval = serde_json::from_slice(&json_bytes).unwrap();
        assert_eq!(interval, roundtrip);
    }
}
