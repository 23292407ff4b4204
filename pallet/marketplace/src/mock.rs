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

use crate as pallet_marketplace;
use codec::Encode;
use frame_support::{
	dispatch::{DispatchError, DispatchResult},
	ensure, parameter_types,
	storage::unhashed,
	PalletId,
};
use sp_core::H256;
use sp_runtime::{
	testing::Header,
	traits::{BlakeTwo256, IdentityLookup},
	PerThing, Permill,
};
use sp_std::vec::Vec;
use trove_pallet_common::*;
use trove_primitives::{AccountId, Balance, TokenId};

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
	pub enum Test where
		Block = Block,
		NodeBlock = Block,
		UncheckedExtrinsic = UncheckedExtrinsic,
	{
		System: frame_system,
		Balances: pallet_balances,
		Timestamp: pallet_timestamp,
		Marketplace: pallet_marketplace,
	}
);

impl_frame_system_config!(Test);
impl_pallet_balance_config!(Test);
impl_pallet_timestamp_config!(Test);

parameter_types! {
	pub const MarketplacePalletId: PalletId = PalletId(*b"marketpl");
	pub const FeePotId: PalletId = PalletId(*b"txfeepot");
	pub const DefaultFeeTo: Option<PalletId> = Some(FeePotId::get());
	pub const DefaultMarketFee: Permill = Permill::from_parts(25_000); // 2.5%
	pub const MaxRaffleEntrants: u32 = 100;
	pub const MaxSalesPerItem: u32 = 100;
}

impl crate::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type Currency = Balances;
	type SftLedger = MockLedger;
	type TimeProvider = Timestamp;
	type RandomSource = MockRandom;
	type PalletId = MarketplacePalletId;
	type DefaultFeeTo = DefaultFeeTo;
	type DefaultMarketFee = DefaultMarketFee;
	type MaxRaffleEntrants = MaxRaffleEntrants;
	type MaxSalesPerItem = MaxSalesPerItem;
	type WeightInfo = ();
}

/// An in-externalities stand-in for the external SFT ledger.
///
/// Balances, supplies, and royalty terms live in raw storage so every test
/// starts clean with its externalities
pub struct MockLedger;

impl MockLedger {
	fn balance_key(who: &AccountId, token_id: TokenId) -> Vec<u8> {
		(b"mock_ledger:balance", who, token_id).encode()
	}

	fn supply_key(token_id: TokenId) -> Vec<u8> {
		(b"mock_ledger:supply", token_id).encode()
	}

	fn royalty_key(token_id: TokenId) -> Vec<u8> {
		(b"mock_ledger:royalty", token_id).encode()
	}

	fn royalties_disabled_key() -> Vec<u8> {
		(b"mock_ledger:royalties_disabled",).encode()
	}

	/// Issue `units` of `token_id` to `who`
	pub fn mint(who: &AccountId, token_id: TokenId, units: Balance) {
		let key = Self::balance_key(who, token_id);
		let balance: Balance = unhashed::get_or_default(&key);
		unhashed::put(&key, &(balance + units));

		let supply_key = Self::supply_key(token_id);
		let supply: Balance = unhashed::get_or_default(&supply_key);
		unhashed::put(&supply_key, &(supply + units));
	}

	/// Configure the royalty terms reported for `token_id`
	pub fn set_royalty(token_id: TokenId, receiver: AccountId, rate: Permill) {
		unhashed::put(&Self::royalty_key(token_id), &(receiver, rate));
	}

	/// Make the ledger report no royalty capability at all
	pub fn disable_royalties() {
		unhashed::put(&Self::royalties_disabled_key(), &true);
	}
}

impl SftLedger for MockLedger {
	type AccountId = AccountId;

	fn token_exists(token_id: TokenId) -> bool {
		unhashed::exists(&Self::supply_key(token_id))
	}

	fn balance_of(who: &AccountId, token_id: TokenId) -> Balance {
		unhashed::get_or_default(&Self::balance_key(who, token_id))
	}

	fn transfer(
		from: &AccountId,
		to: &AccountId,
		token_id: TokenId,
		units: Balance,
	) -> DispatchResult {
		let from_key = Self::balance_key(from, token_id);
		let from_balance: Balance = unhashed::get_or_default(&from_key);
		ensure!(from_balance >= units, DispatchError::Other("mock ledger: balance too low"));
		unhashed::put(&from_key, &(from_balance - units));

		let to_key = Self::balance_key(to, token_id);
		let to_balance: Balance = unhashed::get_or_default(&to_key);
		unhashed::put(&to_key, &(to_balance + units));
		Ok(())
	}

	fn supports_royalties() -> bool {
		!unhashed::exists(&Self::royalties_disabled_key())
	}

	fn royalty_info(token_id: TokenId, sale_price: Balance) -> Option<(AccountId, Balance)> {
		let (receiver, rate): (AccountId, Permill) = unhashed::get(&Self::royalty_key(token_id))?;
		Some((receiver, rate.mul_floor(sale_price)))
	}
}

/// Deterministic randomness for tests; draws whatever was last set
pub struct MockRandom;

impl MockRandom {
	fn next_key() -> Vec<u8> {
		(b"mock_random:next",).encode()
	}

	/// Fix the next drawn value (reduced modulo the requested range)
	pub fn set_next(value: Balance) {
		unhashed::put(&Self::next_key(), &value);
	}
}

impl RandomSource for MockRandom {
	fn draw(range: Balance) -> Balance {
		let next: Balance = unhashed::get_or_default(&Self::next_key());
		next % range.max(1)
	}
}
