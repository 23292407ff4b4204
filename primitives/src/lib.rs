// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

//! Common types across runtimes, pallets, and/or client
#![cfg_attr(not(feature = "std"), no_std)]

pub use types::*;

#[cfg(feature = "std")]
pub mod test_utils;

pub mod types {
	/// An index to a block.
	pub type BlockNumber = u32;

	/// Some way of identifying an account on the chain.
	pub type AccountId = sp_core::H160;

	/// The chain address type
	pub type Address = AccountId;

	/// Balance of an account.
	pub type Balance = u128;

	/// Index of a transaction in the chain.
	pub type Nonce = u32;

	/// A hash of some data used by the chain.
	pub type Hash = sp_core::H256;

	/// Uniquely identifies a token contract (an SFT collection)
	pub type CollectionUuid = u32;

	/// Auto-incrementing Uint
	/// Uniquely identifies a token within a collection
	pub type SerialNumber = u32;

	/// Global unique token identifier
	pub type TokenId = (CollectionUuid, SerialNumber);

	/// Unique Id for an ownership or trade position
	pub type PositionId = u128;

	/// Auto-incrementing Uint
	/// Uniquely identifies a registered marketplace item
	pub type ItemId = u64;

	/// Unix time in seconds
	pub type Timestamp = u64;

	/// One whole unit of the native currency (18 decimals)
	pub const ONE_NATIVE_UNIT: Balance = 1_000_000_000_000_000_000;
}
