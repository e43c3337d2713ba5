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
use std::io;

use thiserror::Error;

use crate::types::GeometryTypeId;

#[derive(Error, Debug)]
pub enum KarstGeometryError {
    /// The byte-order marker is not 0x00/0x01 or the buffer is too short
    /// to hold a record header
    #[error("Malformed WKB header: {0}")]
    MalformedHeader(String),
    /// The stripped base of a WKB type code is outside the known set
    #[error("Unknown WKB geometry type code {0:#010x}")]
    UnknownTypeCode(u32),
    /// A read would advance past the end of the buffer
    #[error("WKB buffer truncated at offset {offset}: need {needed} more bytes")]
    Truncated { offset: usize, needed: usize },
    /// A typed container holds a child outside its permitted set
    #[error("{child} is not a valid child of {parent}")]
    InvalidChildType {
        parent: GeometryTypeId,
        child: GeometryTypeId,
    },
    /// A container and its children disagree on Z/M dimensions
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    IO(#[from] io::Error),
}
