// SPDX-License-Identifier: MPL-2.0

//! Settings drawer module

mod view;
