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

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::collection::{read_collection, write_collection};
use crate::serializer::Serializer;
use std::collections::{LinkedList, VecDeque};

impl<T: Serializer> Serializer for Vec<T> {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_collection(self, context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        read_collection(context)
    }
}

impl<T: Serializer> Serializer for VecDeque<T> {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_collection(self, context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        read_collection(context)
    }
}

impl<T: Serializer> Serializer for LinkedList<T> {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_collection(self, context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        read_collection(context)
    }
}

impl<T: Serializer, const N: usize> Serializer for [T; N] {
    fn jolt_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_collection(self, context)
    }

    fn jolt_read(context: &mut ReadContext) -> Result<Self, Error> {
        let items: Vec<T> = read_collection(context)?;
        let len = items.len();
        crate::ensure!(len == N, "expected an array of {} elements, found {}", N, len);
        <[T; N]>::try_from(items).map_err(|_| Error::invalid_data("array length changed"))
    }
}
