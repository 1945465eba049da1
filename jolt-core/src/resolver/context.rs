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

use crate::buffer::{Reader, Writer};
use crate::config::Config;
use crate::error::Error;
use crate::jolt::Jolt;

pub struct WriteContext<'se> {
    pub writer: &'se mut Writer,
    jolt: &'se Jolt,
    depth: u32,
}

impl<'se> WriteContext<'se> {
    pub fn new(jolt: &'se Jolt, writer: &'se mut Writer) -> WriteContext<'se> {
        WriteContext {
            writer,
            jolt,
            depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_jolt(&self) -> &'se Jolt {
        self.jolt
    }

    #[inline(always)]
    pub fn config(&self) -> &'se Config {
        self.jolt.config()
    }

    #[inline]
    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.depth += 1;
        let max = self.jolt.config().max_depth();
        if self.depth > max {
            return Err(Error::depth_exceed(format!(
                "encoding nests deeper than the maximum depth {}",
                max
            )));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

pub struct ReadContext<'de, 'bf: 'de> {
    pub reader: Reader<'bf>,
    jolt: &'de Jolt,
    depth: u32,
}

impl<'de, 'bf: 'de> ReadContext<'de, 'bf> {
    pub fn new(jolt: &'de Jolt, reader: Reader<'bf>) -> ReadContext<'de, 'bf> {
        ReadContext {
            reader,
            jolt,
            depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_jolt(&self) -> &'de Jolt {
        self.jolt
    }

    #[inline(always)]
    pub fn config(&self) -> &'de Config {
        self.jolt.config()
    }

    #[inline]
    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.depth += 1;
        let max = self.jolt.config().max_depth();
        if self.depth > max {
            return Err(Error::depth_exceed(format!(
                "input nests deeper than the maximum depth {} at byte {}",
                max,
                self.reader.position()
            )));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
