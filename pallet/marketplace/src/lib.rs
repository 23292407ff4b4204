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

#![cfg_attr(not(feature = "std"), no_std)]
//! # Marketplace Module
//!
//! Provides marketplace functionality for semi-fungible tokens
//!
//! A single token supply can be split across four concurrent trade modes:
//! fixed-price sale, English auction, raffle, and collateralized loan. The
//! pallet takes custody of any units placed into a trade mode, settles
//! proceeds with royalty and platform-fee splits, and returns units to
//! ownership positions on completion or cancellation.

use frame_support::{traits::Currency, transactional, PalletId};
pub use pallet::*;
use sp_runtime::{DispatchResult, Permill};
use trove_pallet_common::{RandomSource, SftLedger};
use trove_primitives::{Balance, ItemId, PositionId, Timestamp, TokenId};

mod impls;
#[cfg(test)]
pub mod mock;
pub mod types;

use types::*;
pub mod weights;
pub use weights::WeightInfo;

#[frame_support::pallet]
pub mod pallet {
	use super::{DispatchResult, *};
	use frame_support::{
		pallet_prelude::*,
		traits::{GenesisBuild, UnixTime},
	};
	use frame_system::pallet_prelude::*;
	use sp_runtime::traits::AccountIdConversion;
	use trove_primitives::AccountId;

	/// The current storage version.
	const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

	#[pallet::pallet]
	#[pallet::storage_version(STORAGE_VERSION)]
	pub struct Pallet<T>(_);

	#[pallet::genesis_config]
	pub struct GenesisConfig<T: Config> {
		_phantom: sp_std::marker::PhantomData<T>,
	}

	impl<T: Config> Default for GenesisConfig<T> {
		fn default() -> Self {
			GenesisConfig { _phantom: Default::default() }
		}
	}

	#[pallet::genesis_build]
	impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
		fn build(&self) {
			NextItemId::<T>::put(1 as ItemId);
			NextPositionId::<T>::put(1 as PositionId);
		}
	}

	#[pallet::config]
	pub trait Config: frame_system::Config<AccountId = AccountId> {
		/// The system event type
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
		/// Currency used for trade values, payouts, and claimable balances
		type Currency: Currency<Self::AccountId, Balance = Balance>;
		/// The external semi-fungible token ledger
		type SftLedger: SftLedger<AccountId = Self::AccountId>;
		/// Wall-clock source used for trade deadlines
		type TimeProvider: UnixTime;
		/// Pseudo-random source for raffle winner selection
		type RandomSource: RandomSource;
		/// This pallet's Id, used for deriving the custody account
		#[pallet::constant]
		type PalletId: Get<PalletId>;
		/// The default account which collects platform fees from sales
		#[pallet::constant]
		type DefaultFeeTo: Get<Option<PalletId>>;
		/// The platform fee rate charged until changed by the owner
		#[pallet::constant]
		type DefaultMarketFee: Get<Permill>;
		/// Max entrants a single raffle can hold
		type MaxRaffleEntrants: Get<u32>;
		/// Max sales recorded in one item's history
		type MaxSalesPerItem: Get<u32>;
		/// Provides the public call to weight mapping
		type WeightInfo: WeightInfo;
	}

	#[pallet::type_value]
	pub fn DefaultFeeTo<T: Config>() -> Option<T::AccountId> {
		T::DefaultFeeTo::get().map(|v| v.into_account_truncating())
	}

	#[pallet::type_value]
	pub fn DefaultMarketFee<T: Config>() -> Permill {
		T::DefaultMarketFee::get()
	}

	/// The next available item id
	#[pallet::storage]
	#[pallet::getter(fn next_item_id)]
	pub type NextItemId<T> = StorageValue<_, ItemId, ValueQuery>;

	/// The next available position id
	#[pallet::storage]
	#[pallet::getter(fn next_position_id)]
	pub type NextPositionId<T> = StorageValue<_, PositionId, ValueQuery>;

	/// Registered items keyed by item id
	#[pallet::storage]
	pub type Items<T: Config> = StorageMap<_, Twox64Concat, ItemId, Item<T::AccountId>>;

	/// Reverse lookup from ledger token to item id; enforces one item per token
	#[pallet::storage]
	pub type ItemLookup<T> = StorageMap<_, Twox64Concat, TokenId, ItemId>;

	/// Completed sales per item, append only
	#[pallet::storage]
	#[pallet::getter(fn item_sales)]
	pub type ItemSales<T: Config> = StorageMap<
		_,
		Twox64Concat,
		ItemId,
		BoundedVec<ItemSale<T::AccountId>, T::MaxSalesPerItem>,
		ValueQuery,
	>;

	/// Ownership and trade positions keyed by position id
	#[pallet::storage]
	pub type Positions<T: Config> = StorageMap<_, Twox64Concat, PositionId, Position<T::AccountId>>;

	/// The unique Available position per `(item, owner)`
	#[pallet::storage]
	pub type AvailablePositions<T: Config> =
		StorageDoubleMap<_, Twox64Concat, ItemId, Twox64Concat, T::AccountId, PositionId>;

	/// Auction state for positions in the Auction state
	#[pallet::storage]
	pub type AuctionData<T: Config> =
		StorageMap<_, Twox64Concat, PositionId, AuctionInfo<T::AccountId>>;

	/// Raffle state for positions in the Raffle state
	#[pallet::storage]
	pub type RaffleData<T: Config> = StorageMap<_, Twox64Concat, PositionId, RaffleInfo<T>>;

	/// Loan state for positions in the Loan state
	#[pallet::storage]
	pub type LoanData<T: Config> = StorageMap<_, Twox64Concat, PositionId, LoanInfo<T::AccountId>>;

	/// Amounts owed to recipients whose direct payout failed
	#[pallet::storage]
	#[pallet::getter(fn claimable_balances)]
	pub type ClaimableBalances<T: Config> =
		StorageMap<_, Twox64Concat, T::AccountId, Balance, ValueQuery>;

	/// The platform fee rate charged at settlement
	#[pallet::storage]
	#[pallet::getter(fn market_fee)]
	pub type MarketFee<T: Config> = StorageValue<_, Permill, ValueQuery, DefaultMarketFee<T>>;

	/// The account which collects platform fees
	#[pallet::storage]
	pub type FeeTo<T: Config> = StorageValue<_, Option<T::AccountId>, ValueQuery, DefaultFeeTo<T>>;

	#[pallet::event]
	#[pallet::generate_deposit(pub (super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// A new item has been registered
		ItemCreated { item_id: ItemId, token_id: TokenId, creator: T::AccountId },
		/// A position has been created or its contents changed
		PositionUpdate {
			position_id: PositionId,
			item_id: ItemId,
			owner: T::AccountId,
			amount: Balance,
			price: Balance,
			market_fee: Permill,
			state: PositionState,
		},
		/// A position has been removed
		PositionDelete { position_id: PositionId },
		/// Units have changed hands for value
		MarketItemSold {
			item_id: ItemId,
			token_id: TokenId,
			seller: T::AccountId,
			buyer: T::AccountId,
			price: Balance,
			amount: Balance,
		},
		/// The platform fee rate has been changed
		MarketFeeChanged { old_fee: Permill, new_fee: Permill },
		/// A royalty payout was made
		RoyaltiesPaid { token_id: TokenId, value: Balance },
		/// A new highest bid was placed
		Bid { position_id: PositionId, bidder: T::AccountId, amount: Balance },
		/// A raffle received an entry
		RaffleEntered { position_id: PositionId, entrant: T::AccountId, tickets: Balance },
		/// A loan has been funded
		LoanFunded { position_id: PositionId, lender: T::AccountId, deadline: Timestamp },
		/// A loan has been repaid and its collateral returned
		LoanRepaid { position_id: PositionId, value: Balance },
		/// A loan's collateral has been claimed by the lender
		LoanLiquidated { position_id: PositionId, lender: T::AccountId },
		/// A direct payout failed and was credited as a claimable balance
		PayoutDeferred { who: T::AccountId, amount: Balance },
		/// A claimable balance has been withdrawn
		Withdrawn { who: T::AccountId, amount: Balance },
		/// The platform fee receiver address has been updated
		FeeToSet { account: Option<T::AccountId> },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// No more Ids are available, they've been exhausted
		NoAvailableIds,
		/// The referenced item or position does not exist
		NotFound,
		/// An item already exists for the token
		AlreadyExists,
		/// The position is not in the state required for the operation
		WrongState,
		/// The caller does not hold the role required for the operation
		Unauthorized,
		/// The caller holds no units of the token
		NoBalance,
		/// The ledger balance or position amount is too low
		InsufficientBalance,
		/// The supplied value does not match what the operation requires
		BadValue,
		/// A parameter is out of range
		BadParameter,
		/// The deadline has not passed yet
		DeadlineNotReached,
		/// The deadline has passed
		DeadlineExceeded,
		/// The loan has already been funded
		AlreadyFunded,
		/// The loan has not been funded
		NotFunded,
		/// The raffle cannot accept more entrants
		MaxEntrantsReached,
		/// The item's sale history is full
		MaxSalesReached,
		/// The caller has no claimable balance
		NothingToWithdraw,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Register a ledger token as a marketplace item
		///
		/// Caller must hold at least one unit of the token.
		/// The caller is recorded as the item's creator
		#[pallet::call_index(0)]
		#[pallet::weight(T::WeightInfo::create_item())]
		pub fn create_item(origin: OriginFor<T>, token_id: TokenId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_create_item(who, token_id)?;
			Ok(())
		}

		/// Put `units` of an item up for fixed-price sale
		///
		/// Units are taken into pallet custody until sold or unlisted.
		/// `price_per_unit` ask price for each unit
		#[pallet::call_index(1)]
		#[pallet::weight(T::WeightInfo::sell())]
		#[transactional]
		pub fn sell(
			origin: OriginFor<T>,
			item_id: ItemId,
			units: Balance,
			price_per_unit: Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_sell(who, item_id, units, price_per_unit)?;
			Ok(())
		}

		/// Buy `units` from a fixed-price sale position
		///
		/// `value` must equal `price_per_unit * units` exactly
		#[pallet::call_index(2)]
		#[pallet::weight(T::WeightInfo::buy())]
		#[transactional]
		pub fn buy(
			origin: OriginFor<T>,
			position_id: PositionId,
			units: Balance,
			value: Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_buy(who, position_id, units, value)
		}

		/// Close a fixed-price sale, returning the unsold units
		/// Caller must be the listed seller
		#[pallet::call_index(3)]
		#[pallet::weight(T::WeightInfo::cancel_sale())]
		#[transactional]
		pub fn cancel_sale(origin: OriginFor<T>, position_id: PositionId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_cancel_sale(who, position_id)
		}

		/// Auction `units` of an item to the highest bidder
		///
		/// - `duration_minutes` length of the auction, 1 hour to 31 days
		/// - `min_bid` the first bid must meet this threshold
		#[pallet::call_index(4)]
		#[pallet::weight(T::WeightInfo::auction())]
		#[transactional]
		pub fn auction(
			origin: OriginFor<T>,
			item_id: ItemId,
			units: Balance,
			duration_minutes: u32,
			min_bid: Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_auction(who, item_id, units, duration_minutes, min_bid)?;
			Ok(())
		}

		/// Place a bid of `value` on an open auction
		///
		/// The current highest bidder may top up their own bid incrementally;
		/// any other bidder must exceed the current highest bid. The previous
		/// highest bidder is refunded
		#[pallet::call_index(5)]
		#[pallet::weight(T::WeightInfo::bid())]
		#[transactional]
		pub fn bid(origin: OriginFor<T>, position_id: PositionId, value: Balance) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_bid(who, position_id, value)
		}

		/// Settle an auction whose deadline has passed
		///
		/// Pays out the winning bid and transfers the units to the winner, or
		/// returns the units to the seller if no bid was made
		#[pallet::call_index(6)]
		#[pallet::weight(T::WeightInfo::end_auction())]
		#[transactional]
		pub fn end_auction(origin: OriginFor<T>, position_id: PositionId) -> DispatchResult {
			ensure_signed(origin)?;
			Self::do_end_auction(position_id)
		}

		/// Raffle `units` of an item among paying entrants
		#[pallet::call_index(7)]
		#[pallet::weight(T::WeightInfo::raffle())]
		#[transactional]
		pub fn raffle(
			origin: OriginFor<T>,
			item_id: ItemId,
			units: Balance,
			duration_minutes: u32,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_raffle(who, item_id, units, duration_minutes)?;
			Ok(())
		}

		/// Enter an open raffle with `value`
		///
		/// Each whole native unit buys one ticket; `value` below one whole
		/// unit is rejected
		#[pallet::call_index(8)]
		#[pallet::weight(T::WeightInfo::enter_raffle())]
		#[transactional]
		pub fn enter_raffle(
			origin: OriginFor<T>,
			position_id: PositionId,
			value: Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_enter_raffle(who, position_id, value)
		}

		/// Settle a raffle whose deadline has passed
		///
		/// Draws a winner weighted by contribution and settles the pot, or
		/// returns the units to the seller if nobody entered
		#[pallet::call_index(9)]
		#[pallet::weight(T::WeightInfo::end_raffle())]
		#[transactional]
		pub fn end_raffle(origin: OriginFor<T>, position_id: PositionId) -> DispatchResult {
			ensure_signed(origin)?;
			Self::do_end_raffle(position_id)
		}

		/// Pledge `units` of an item as collateral for a loan
		///
		/// - `loan_amount` principal requested
		/// - `fee_amount` interest owed on top of the principal at repayment
		/// - `duration_minutes` loan term, starts when the loan is funded
		#[pallet::call_index(10)]
		#[pallet::weight(T::WeightInfo::create_loan())]
		#[transactional]
		pub fn create_loan(
			origin: OriginFor<T>,
			item_id: ItemId,
			units: Balance,
			loan_amount: Balance,
			fee_amount: Balance,
			duration_minutes: u32,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_create_loan(who, item_id, units, loan_amount, fee_amount, duration_minutes)?;
			Ok(())
		}

		/// Fund an open loan request
		///
		/// `value` must equal the requested principal exactly. The principal
		/// is paid to the borrower and the repayment deadline starts now
		#[pallet::call_index(11)]
		#[pallet::weight(T::WeightInfo::fund_loan())]
		#[transactional]
		pub fn fund_loan(
			origin: OriginFor<T>,
			position_id: PositionId,
			value: Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_fund_loan(who, position_id, value)
		}

		/// Repay a funded loan, releasing the collateral to the borrower
		///
		/// `value` must cover principal plus fee; the full value is paid to
		/// the lender
		#[pallet::call_index(12)]
		#[pallet::weight(T::WeightInfo::repay_loan())]
		#[transactional]
		pub fn repay_loan(
			origin: OriginFor<T>,
			position_id: PositionId,
			value: Balance,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_repay_loan(who, position_id, value)
		}

		/// Claim the collateral of a defaulted loan
		/// Caller must be the lender; the repayment deadline must have passed
		#[pallet::call_index(13)]
		#[pallet::weight(T::WeightInfo::liquidate_loan())]
		#[transactional]
		pub fn liquidate_loan(origin: OriginFor<T>, position_id: PositionId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_liquidate_loan(who, position_id)
		}

		/// Withdraw an unfunded loan request, returning the collateral
		/// Caller must be the borrower
		#[pallet::call_index(14)]
		#[pallet::weight(T::WeightInfo::cancel_loan())]
		#[transactional]
		pub fn cancel_loan(origin: OriginFor<T>, position_id: PositionId) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_cancel_loan(who, position_id)
		}

		/// Withdraw the caller's accrued claimable balance
		#[pallet::call_index(15)]
		#[pallet::weight(T::WeightInfo::withdraw())]
		#[transactional]
		pub fn withdraw(origin: OriginFor<T>) -> DispatchResult {
			let who = ensure_signed(origin)?;
			Self::do_withdraw(who)
		}

		/// Set the platform fee rate charged on new positions
		/// This operation requires root access
		#[pallet::call_index(16)]
		#[pallet::weight(T::WeightInfo::set_market_fee())]
		pub fn set_market_fee(origin: OriginFor<T>, fee: Permill) -> DispatchResult {
			ensure_root(origin)?;
			Self::do_set_market_fee(fee)
		}

		/// Set the `FeeTo` account
		/// This operation requires root access
		#[pallet::call_index(17)]
		#[pallet::weight(T::WeightInfo::set_fee_to())]
		pub fn set_fee_to(origin: OriginFor<T>, fee_to: Option<T::AccountId>) -> DispatchResult {
			ensure_root(origin)?;
			Self::do_set_fee_to(fee_to)
		}
	}
}
