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

//! shared pallet types and traits
#![cfg_attr(not(feature = "std"), no_std)]

pub use frame_support::log as logger;
use frame_support::dispatch::DispatchResult;
use sp_std::fmt::Debug;
use trove_primitives::{Balance, TokenId};

#[cfg(feature = "std")]
pub mod test_utils;
#[cfg(feature = "std")]
pub use test_utils::test_prelude;

/// syntactic sugar for logging.
/// the caller must define a variable `LOG_TARGET = "<my-target>"`
#[macro_export]
macro_rules! log {
	($level:tt, $patter:expr $(, $values:expr)* $(,)?) => {
		trove_pallet_common::logger::$level!(
			target: crate::LOG_TARGET,
			$patter $(, $values)*
		)
	};
}

/// Capability surface required of the external semi-fungible token ledger.
///
/// The ledger owns balance accounting, transfer authorization, and royalty
/// terms; pallets consuming this trait act with ledger-side authority over
/// the balances placed in their custody.
pub trait SftLedger {
	type AccountId: Debug + PartialEq + Clone;

	/// Returns whether `token_id` has been issued on the ledger
	fn token_exists(token_id: TokenId) -> bool;

	/// Returns the units of `token_id` held by `who`
	fn balance_of(who: &Self::AccountId, token_id: TokenId) -> Balance;

	/// Move `units` of `token_id` from `from` to `to`
	/// Fails if `from` holds fewer than `units`
	fn transfer(
		from: &Self::AccountId,
		to: &Self::AccountId,
		token_id: TokenId,
		units: Balance,
	) -> DispatchResult;

	/// Whether the ledger can report royalty terms for its tokens
	fn supports_royalties() -> bool;

	/// The royalty receiver and amount owed on a sale of `token_id` for
	/// `sale_price`. `amount <= sale_price` and the result is deterministic
	/// for a given `(token_id, sale_price)` (EIP-2981 semantics)
	fn royalty_info(token_id: TokenId, sale_price: Balance)
		-> Option<(Self::AccountId, Balance)>;
}

/// Draws pseudo-random integers, e.g. for raffle winner selection.
///
/// Implementations must be deterministic given their seed; the quality of the
/// source is a runtime concern, not a pallet concern.
pub trait RandomSource {
	/// Returns a value in `[0, range)`. `range` must be non-zero
	fn draw(range: Balance) -> Balance;
}

impl RandomSource for () {
	fn draw(_range: Balance) -> Balance {
		0
	}
}
