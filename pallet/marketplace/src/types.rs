// Copyright 2022-2023 Futureverse Corporation Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// You may obtain a copy of the License at the root of this project source code

//! Marketplace pallet types

use crate::Config;

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{BoundedVec, Permill};
use trove_primitives::{Balance, ItemId, Timestamp, TokenId};

/// The logging target for this module
pub(crate) const LOG_TARGET: &str = "marketplace";

/// Time before an auction deadline within which an accepted bid extends the
/// deadline back out to this many seconds remaining
pub const AUCTION_EXTENSION_PERIOD: Timestamp = 600;

/// Listing duration bounds for auctions and raffles, in minutes (1 hour to 31 days)
pub const MIN_LISTING_DURATION: u32 = 60;
pub const MAX_LISTING_DURATION: u32 = 44_640;

/// Loan duration bounds, in minutes (1 minute to ~5 years)
pub const MIN_LOAN_DURATION: u32 = 1;
pub const MAX_LOAN_DURATION: u32 = 2_628_000;

/// Upper bound on the platform fee rate (10%)
pub const MAX_MARKET_FEE: Permill = Permill::from_parts(100_000);

/// A registered `(contract, token)` pair tradeable on the marketplace
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct Item<AccountId> {
	/// The ledger token this item wraps
	pub token_id: TokenId,
	/// The first account to register the item
	pub creator: AccountId,
	/// Number of live positions over this item
	pub position_count: u32,
}

/// The trade state a position is in
#[derive(Debug, Copy, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub enum PositionState {
	/// Units owned by an address and not committed to any trade mode
	Available,
	RegularSale,
	Auction,
	Raffle,
	Loan,
}

/// A bucket of units of one item held by one owner in one state.
///
/// While the state is not `Available` the pallet holds `amount` units of the
/// item in custody on the ledger.
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct Position<AccountId> {
	/// The item the units belong to
	pub item_id: ItemId,
	/// The account the units are attributed to
	pub owner: AccountId,
	/// Number of units in this position
	pub amount: Balance,
	/// Price per unit (regular sale) or minimum bid (auction); zero otherwise
	pub price: Balance,
	/// The platform fee rate captured when the position was created, applied
	/// at settlement regardless of later fee changes
	pub market_fee: Permill,
	pub state: PositionState,
}

/// A completed sale, appended to an item's history
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct ItemSale<AccountId> {
	pub seller: AccountId,
	pub buyer: AccountId,
	/// Gross value paid by the buyer
	pub price: Balance,
	/// Units transferred
	pub amount: Balance,
}

/// Auction sidecar data
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct AuctionInfo<AccountId> {
	/// When bidding closes, unix seconds
	pub deadline: Timestamp,
	/// The threshold amount for a successful first bid
	pub min_bid: Balance,
	/// The current winning bidder, if any bid has been accepted
	pub highest_bidder: Option<AccountId>,
	/// The current winning bid; non-zero iff `highest_bidder` is set
	pub highest_bid: Balance,
}

/// A single raffle participant's accumulated contribution
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct RaffleEntry<AccountId> {
	pub entrant: AccountId,
	/// Whole-unit tickets contributed so far by `entrant`
	pub contribution: Balance,
}

/// Raffle sidecar data
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
#[scale_info(skip_type_params(T))]
#[codec(mel_bound(T: Config))]
pub struct RaffleInfo<T: Config> {
	/// When entries close, unix seconds
	pub deadline: Timestamp,
	/// Sum of all entry contributions, in whole-unit tickets
	pub total_value: Balance,
	/// Entries in insertion order; one per entrant
	pub entries: BoundedVec<RaffleEntry<T::AccountId>, T::MaxRaffleEntrants>,
}

/// Loan sidecar data
#[derive(Debug, Clone, Encode, Decode, PartialEq, Eq, TypeInfo, MaxEncodedLen)]
pub struct LoanInfo<AccountId> {
	/// Principal the borrower is asking for
	pub loan_amount: Balance,
	/// Interest owed on top of the principal at repayment
	pub fee_amount: Balance,
	/// Loan term, starts when the loan is funded
	pub duration_minutes: u32,
	/// The funding account; `None` until funded
	pub lender: Option<AccountId>,
	/// Repayment deadline, unix seconds; zero iff `lender` is `None`
	pub deadline: Timestamp,
}
