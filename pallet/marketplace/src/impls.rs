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

use crate::*;
use frame_support::{
	ensure,
	traits::{Currency, ExistenceRequirement, Get, UnixTime},
};
use sp_runtime::{
	traits::{AccountIdConversion, One, Zero},
	DispatchError, DispatchResult, PerThing, Permill,
};
use sp_std::vec::Vec;
use trove_pallet_common::{log, RandomSource, SftLedger};
use trove_primitives::{Balance, ItemId, PositionId, Timestamp, TokenId, ONE_NATIVE_UNIT};
use types::*;

impl<T: Config> Pallet<T> {
	/// The custody account holding listed units and in-flight trade value
	pub fn account_id() -> T::AccountId {
		T::PalletId::get().into_account_truncating()
	}

	/// Current unix time in seconds
	pub(crate) fn now() -> Timestamp {
		T::TimeProvider::now().as_secs()
	}

	pub fn do_create_item(
		who: T::AccountId,
		token_id: TokenId,
	) -> Result<ItemId, DispatchError> {
		ensure!(!<ItemLookup<T>>::contains_key(token_id), Error::<T>::AlreadyExists);
		ensure!(T::SftLedger::token_exists(token_id), Error::<T>::NotFound);
		ensure!(!T::SftLedger::balance_of(&who, token_id).is_zero(), Error::<T>::NoBalance);

		let item_id = Self::next_item_id();
		ensure!(item_id.checked_add(One::one()).is_some(), Error::<T>::NoAvailableIds);

		let item = Item { token_id, creator: who.clone(), position_count: 0 };
		<Items<T>>::insert(item_id, item);
		<ItemLookup<T>>::insert(token_id, item_id);
		<NextItemId<T>>::mutate(|i| *i += 1);

		Self::deposit_event(Event::<T>::ItemCreated { item_id, token_id, creator: who });
		Ok(item_id)
	}

	pub fn do_sell(
		who: T::AccountId,
		item_id: ItemId,
		units: Balance,
		price_per_unit: Balance,
	) -> Result<PositionId, DispatchError> {
		ensure!(!price_per_unit.is_zero(), Error::<T>::BadParameter);
		let (position_id, _) =
			Self::open_position(&who, item_id, units, price_per_unit, PositionState::RegularSale)?;
		Ok(position_id)
	}

	pub fn do_buy(
		who: T::AccountId,
		position_id: PositionId,
		units: Balance,
		value: Balance,
	) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::RegularSale, Error::<T>::WrongState);
		ensure!(!units.is_zero(), Error::<T>::BadParameter);
		ensure!(units <= position.amount, Error::<T>::InsufficientBalance);
		let required = position.price.checked_mul(units).ok_or(Error::<T>::BadValue)?;
		ensure!(value == required, Error::<T>::BadValue);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::take_value(&who, value)?;

		// inventory leaves the position before any value or units move out
		Self::decrease_position(position_id, units)?;
		Self::record_sale(
			position.item_id,
			ItemSale {
				seller: position.owner.clone(),
				buyer: who.clone(),
				price: value,
				amount: units,
			},
		)?;

		Self::settle(&position, item.token_id, &who, value, units)?;
		Self::merge_or_create_available(position.item_id, &who, item.token_id)?;

		Self::deposit_event(Event::<T>::MarketItemSold {
			item_id: position.item_id,
			token_id: item.token_id,
			seller: position.owner,
			buyer: who,
			price: value,
			amount: units,
		});
		Ok(())
	}

	pub fn do_cancel_sale(who: T::AccountId, position_id: PositionId) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::RegularSale, Error::<T>::WrongState);
		ensure!(position.owner == who, Error::<T>::Unauthorized);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::remove_position(position_id, &position);
		Self::release_units(&who, item.token_id, position.amount)?;
		Self::merge_or_create_available(position.item_id, &who, item.token_id)?;
		Ok(())
	}

	pub fn do_auction(
		who: T::AccountId,
		item_id: ItemId,
		units: Balance,
		duration_minutes: u32,
		min_bid: Balance,
	) -> Result<PositionId, DispatchError> {
		ensure!(
			(MIN_LISTING_DURATION..=MAX_LISTING_DURATION).contains(&duration_minutes),
			Error::<T>::BadParameter
		);
		let (position_id, _) =
			Self::open_position(&who, item_id, units, min_bid, PositionState::Auction)?;

		let deadline = Self::now().saturating_add(duration_minutes as Timestamp * 60);
		<AuctionData<T>>::insert(
			position_id,
			AuctionInfo { deadline, min_bid, highest_bidder: None, highest_bid: 0 },
		);
		Ok(position_id)
	}

	pub fn do_bid(who: T::AccountId, position_id: PositionId, value: Balance) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Auction, Error::<T>::WrongState);
		let mut auction = <AuctionData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		let now = Self::now();
		ensure!(now <= auction.deadline, Error::<T>::DeadlineExceeded);

		if auction.highest_bidder.as_ref() == Some(&who) {
			// incremental top-up by the current winner, no minimum gap
			ensure!(!value.is_zero(), Error::<T>::BadValue);
			Self::take_value(&who, value)?;
			auction.highest_bid = auction.highest_bid.saturating_add(value);
		} else {
			let floor = auction.min_bid.max(auction.highest_bid.saturating_add(1));
			ensure!(value >= floor, Error::<T>::BadValue);
			Self::take_value(&who, value)?;
			if let Some(previous) = auction.highest_bidder.take() {
				// outbid refund is failure-tolerant
				Self::pay_or_credit(&previous, auction.highest_bid);
			}
			auction.highest_bidder = Some(who.clone());
			auction.highest_bid = value;
		}

		// soft close: a bid landing with less than the extension period left
		// pushes the deadline back out to a full extension period from now
		if auction.deadline - now < AUCTION_EXTENSION_PERIOD {
			auction.deadline = now.saturating_add(AUCTION_EXTENSION_PERIOD);
		}

		let amount = auction.highest_bid;
		<AuctionData<T>>::insert(position_id, &auction);

		Self::deposit_event(Event::<T>::Bid { position_id, bidder: who, amount });
		Ok(())
	}

	pub fn do_end_auction(position_id: PositionId) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Auction, Error::<T>::WrongState);
		let auction = <AuctionData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(Self::now() > auction.deadline, Error::<T>::DeadlineNotReached);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::remove_position(position_id, &position);

		let Some(winner) = auction.highest_bidder else {
			// normal closure, no acceptable bids
			Self::release_units(&position.owner, item.token_id, position.amount)?;
			Self::merge_or_create_available(position.item_id, &position.owner, item.token_id)?;
			return Ok(());
		};

		Self::record_sale(
			position.item_id,
			ItemSale {
				seller: position.owner.clone(),
				buyer: winner.clone(),
				price: auction.highest_bid,
				amount: position.amount,
			},
		)?;
		Self::settle(&position, item.token_id, &winner, auction.highest_bid, position.amount)?;
		Self::merge_or_create_available(position.item_id, &winner, item.token_id)?;

		Self::deposit_event(Event::<T>::MarketItemSold {
			item_id: position.item_id,
			token_id: item.token_id,
			seller: position.owner,
			buyer: winner,
			price: auction.highest_bid,
			amount: position.amount,
		});
		Ok(())
	}

	pub fn do_raffle(
		who: T::AccountId,
		item_id: ItemId,
		units: Balance,
		duration_minutes: u32,
	) -> Result<PositionId, DispatchError> {
		ensure!(
			(MIN_LISTING_DURATION..=MAX_LISTING_DURATION).contains(&duration_minutes),
			Error::<T>::BadParameter
		);
		let (position_id, _) = Self::open_position(&who, item_id, units, 0, PositionState::Raffle)?;

		let deadline = Self::now().saturating_add(duration_minutes as Timestamp * 60);
		<RaffleData<T>>::insert(
			position_id,
			RaffleInfo { deadline, total_value: 0, entries: Default::default() },
		);
		Ok(position_id)
	}

	pub fn do_enter_raffle(
		who: T::AccountId,
		position_id: PositionId,
		value: Balance,
	) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Raffle, Error::<T>::WrongState);

		<RaffleData<T>>::try_mutate(position_id, |maybe_raffle| -> DispatchResult {
			let raffle = maybe_raffle.as_mut().ok_or(Error::<T>::NotFound)?;
			ensure!(Self::now() <= raffle.deadline, Error::<T>::DeadlineExceeded);
			ensure!(value >= ONE_NATIVE_UNIT, Error::<T>::BadValue);

			// whole-unit tickets only; a sub-unit remainder buys nothing
			let tickets = value / ONE_NATIVE_UNIT;
			Self::take_value(&who, value)?;

			if let Some(entry) = raffle.entries.iter_mut().find(|entry| entry.entrant == who) {
				entry.contribution = entry.contribution.saturating_add(tickets);
			} else {
				raffle
					.entries
					.try_push(RaffleEntry { entrant: who.clone(), contribution: tickets })
					.map_err(|_| Error::<T>::MaxEntrantsReached)?;
			}
			raffle.total_value = raffle.total_value.saturating_add(tickets);

			Self::deposit_event(Event::<T>::RaffleEntered {
				position_id,
				entrant: who.clone(),
				tickets,
			});
			Ok(())
		})
	}

	pub fn do_end_raffle(position_id: PositionId) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Raffle, Error::<T>::WrongState);
		let raffle = <RaffleData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(Self::now() > raffle.deadline, Error::<T>::DeadlineNotReached);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::remove_position(position_id, &position);

		if raffle.total_value.is_zero() {
			// nobody entered; the seller takes the units back
			Self::release_units(&position.owner, item.token_id, position.amount)?;
			Self::merge_or_create_available(position.item_id, &position.owner, item.token_id)?;
			return Ok(());
		}

		let winner = Self::draw_raffle_winner(&raffle)?;
		let gross = raffle.total_value.saturating_mul(ONE_NATIVE_UNIT);

		Self::record_sale(
			position.item_id,
			ItemSale {
				seller: position.owner.clone(),
				buyer: winner.clone(),
				price: gross,
				amount: position.amount,
			},
		)?;
		Self::settle(&position, item.token_id, &winner, gross, position.amount)?;
		Self::merge_or_create_available(position.item_id, &winner, item.token_id)?;

		Self::deposit_event(Event::<T>::MarketItemSold {
			item_id: position.item_id,
			token_id: item.token_id,
			seller: position.owner,
			buyer: winner,
			price: gross,
			amount: position.amount,
		});
		Ok(())
	}

	/// Picks the winning entrant: draws `r` in `[0, total_value)` and walks
	/// the entries in insertion order until the running contribution total
	/// exceeds `r`
	fn draw_raffle_winner(raffle: &RaffleInfo<T>) -> Result<T::AccountId, DispatchError> {
		let r = T::RandomSource::draw(raffle.total_value);
		let mut running: Balance = 0;
		for entry in raffle.entries.iter() {
			running = running.saturating_add(entry.contribution);
			if running > r {
				return Ok(entry.entrant.clone());
			}
		}
		// contributions sum to total_value and r < total_value, so the loop
		// always returns for a well-behaved source; the last entrant backstops
		let last = raffle.entries.last().ok_or(Error::<T>::NotFound)?;
		Ok(last.entrant.clone())
	}

	pub fn do_create_loan(
		who: T::AccountId,
		item_id: ItemId,
		units: Balance,
		loan_amount: Balance,
		fee_amount: Balance,
		duration_minutes: u32,
	) -> Result<PositionId, DispatchError> {
		ensure!(!loan_amount.is_zero(), Error::<T>::BadParameter);
		ensure!(
			(MIN_LOAN_DURATION..=MAX_LOAN_DURATION).contains(&duration_minutes),
			Error::<T>::BadParameter
		);
		let (position_id, _) = Self::open_position(&who, item_id, units, 0, PositionState::Loan)?;

		<LoanData<T>>::insert(
			position_id,
			LoanInfo { loan_amount, fee_amount, duration_minutes, lender: None, deadline: 0 },
		);
		Ok(position_id)
	}

	pub fn do_fund_loan(
		who: T::AccountId,
		position_id: PositionId,
		value: Balance,
	) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Loan, Error::<T>::WrongState);
		let mut loan = <LoanData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(loan.lender.is_none(), Error::<T>::AlreadyFunded);
		ensure!(value == loan.loan_amount, Error::<T>::BadValue);

		Self::take_value(&who, value)?;

		let deadline = Self::now().saturating_add(loan.duration_minutes as Timestamp * 60);
		loan.lender = Some(who.clone());
		loan.deadline = deadline;
		<LoanData<T>>::insert(position_id, &loan);

		// principal goes straight to the borrower
		Self::pay_or_credit(&position.owner, value);

		Self::deposit_event(Event::<T>::LoanFunded { position_id, lender: who, deadline });
		Ok(())
	}

	pub fn do_repay_loan(
		who: T::AccountId,
		position_id: PositionId,
		value: Balance,
	) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Loan, Error::<T>::WrongState);
		let loan = <LoanData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		let lender = loan.lender.clone().ok_or(Error::<T>::NotFunded)?;
		ensure!(value >= loan.loan_amount.saturating_add(loan.fee_amount), Error::<T>::BadValue);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::take_value(&who, value)?;
		Self::remove_position(position_id, &position);

		// the full repayment, excess included, goes to the lender
		Self::pay_or_credit(&lender, value);
		Self::release_units(&position.owner, item.token_id, position.amount)?;
		Self::merge_or_create_available(position.item_id, &position.owner, item.token_id)?;

		Self::deposit_event(Event::<T>::LoanRepaid { position_id, value });
		Ok(())
	}

	pub fn do_liquidate_loan(who: T::AccountId, position_id: PositionId) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Loan, Error::<T>::WrongState);
		let loan = <LoanData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		let lender = loan.lender.clone().ok_or(Error::<T>::NotFunded)?;
		ensure!(lender == who, Error::<T>::Unauthorized);
		ensure!(Self::now() > loan.deadline, Error::<T>::DeadlineNotReached);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::remove_position(position_id, &position);
		Self::release_units(&lender, item.token_id, position.amount)?;
		Self::merge_or_create_available(position.item_id, &lender, item.token_id)?;

		Self::deposit_event(Event::<T>::LoanLiquidated { position_id, lender });
		Ok(())
	}

	pub fn do_cancel_loan(who: T::AccountId, position_id: PositionId) -> DispatchResult {
		let position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.state == PositionState::Loan, Error::<T>::WrongState);
		ensure!(position.owner == who, Error::<T>::Unauthorized);
		let loan = <LoanData<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(loan.lender.is_none(), Error::<T>::AlreadyFunded);
		let item = <Items<T>>::get(position.item_id).ok_or(Error::<T>::NotFound)?;

		Self::remove_position(position_id, &position);
		Self::release_units(&who, item.token_id, position.amount)?;
		Self::merge_or_create_available(position.item_id, &who, item.token_id)?;
		Ok(())
	}

	pub fn do_withdraw(who: T::AccountId) -> DispatchResult {
		let amount = <ClaimableBalances<T>>::take(&who);
		ensure!(!amount.is_zero(), Error::<T>::NothingToWithdraw);
		T::Currency::transfer(
			&Self::account_id(),
			&who,
			amount,
			ExistenceRequirement::AllowDeath,
		)?;
		Self::deposit_event(Event::<T>::Withdrawn { who, amount });
		Ok(())
	}

	pub(crate) fn do_set_market_fee(fee: Permill) -> DispatchResult {
		ensure!(fee <= MAX_MARKET_FEE, Error::<T>::BadParameter);
		let old_fee = <MarketFee<T>>::get();
		<MarketFee<T>>::put(fee);
		Self::deposit_event(Event::MarketFeeChanged { old_fee, new_fee: fee });
		Ok(())
	}

	pub(crate) fn do_set_fee_to(fee_to: Option<T::AccountId>) -> DispatchResult {
		<FeeTo<T>>::put(&fee_to);
		Self::deposit_event(Event::FeeToSet { account: fee_to });
		Ok(())
	}

	/// Validates a new trade listing and takes `units` into custody, creating
	/// the backing position in `state`
	fn open_position(
		who: &T::AccountId,
		item_id: ItemId,
		units: Balance,
		price: Balance,
		state: PositionState,
	) -> Result<(PositionId, TokenId), DispatchError> {
		ensure!(!units.is_zero(), Error::<T>::BadParameter);
		let item = <Items<T>>::get(item_id).ok_or(Error::<T>::NotFound)?;
		ensure!(
			T::SftLedger::balance_of(who, item.token_id) >= units,
			Error::<T>::InsufficientBalance
		);

		// custody ingestion is the one transfer whose failure aborts
		T::SftLedger::transfer(who, &Self::account_id(), item.token_id, units)?;

		let position_id = Self::create_position(item_id, who.clone(), units, price, state)?;
		Self::merge_or_create_available(item_id, who, item.token_id)?;
		Ok((position_id, item.token_id))
	}

	/// Creates a position over `amount` units of `item_id`, snapshotting the
	/// current platform fee rate
	pub(crate) fn create_position(
		item_id: ItemId,
		owner: T::AccountId,
		amount: Balance,
		price: Balance,
		state: PositionState,
	) -> Result<PositionId, DispatchError> {
		let position_id = Self::next_position_id();
		ensure!(position_id.checked_add(One::one()).is_some(), Error::<T>::NoAvailableIds);

		let market_fee = Self::market_fee();
		let position = Position { item_id, owner: owner.clone(), amount, price, market_fee, state };
		<Positions<T>>::insert(position_id, &position);
		<NextPositionId<T>>::mutate(|i| *i += 1);
		<Items<T>>::mutate(item_id, |maybe_item| {
			if let Some(item) = maybe_item {
				item.position_count = item.position_count.saturating_add(1);
			}
		});

		Self::deposit_event(Event::<T>::PositionUpdate {
			position_id,
			item_id,
			owner,
			amount,
			price,
			market_fee,
			state,
		});
		Ok(position_id)
	}

	/// Subtracts `units` from a position, deleting it and its sidecar data
	/// when it reaches zero
	pub(crate) fn decrease_position(position_id: PositionId, units: Balance) -> DispatchResult {
		let mut position = <Positions<T>>::get(position_id).ok_or(Error::<T>::NotFound)?;
		ensure!(position.amount >= units, Error::<T>::InsufficientBalance);
		position.amount -= units;

		if position.amount.is_zero() {
			Self::remove_position(position_id, &position);
		} else {
			<Positions<T>>::insert(position_id, &position);
			Self::deposit_event(Event::<T>::PositionUpdate {
				position_id,
				item_id: position.item_id,
				owner: position.owner,
				amount: position.amount,
				price: position.price,
				market_fee: position.market_fee,
				state: position.state,
			});
		}
		Ok(())
	}

	/// Removes a position and its sidecar data from storage
	pub(crate) fn remove_position(position_id: PositionId, position: &Position<T::AccountId>) {
		<Positions<T>>::remove(position_id);
		<AuctionData<T>>::remove(position_id);
		<RaffleData<T>>::remove(position_id);
		<LoanData<T>>::remove(position_id);
		if position.state == PositionState::Available {
			<AvailablePositions<T>>::remove(position.item_id, &position.owner);
		}
		<Items<T>>::mutate(position.item_id, |maybe_item| {
			if let Some(item) = maybe_item {
				item.position_count = item.position_count.saturating_sub(1);
			}
		});
		Self::deposit_event(Event::<T>::PositionDelete { position_id });
	}

	/// Re-reads `owner`'s ledger balance for an item and folds it into their
	/// unique Available position.
	///
	/// The ledger is authoritative for units held outside custody; re-syncing
	/// after every transfer leg keeps Available positions from drifting
	pub(crate) fn merge_or_create_available(
		item_id: ItemId,
		owner: &T::AccountId,
		token_id: TokenId,
	) -> DispatchResult {
		let balance = T::SftLedger::balance_of(owner, token_id);
		if let Some(position_id) = <AvailablePositions<T>>::get(item_id, owner) {
			<Positions<T>>::try_mutate(position_id, |maybe_position| -> DispatchResult {
				let position = maybe_position.as_mut().ok_or(Error::<T>::NotFound)?;
				position.amount = balance;
				Self::deposit_event(Event::<T>::PositionUpdate {
					position_id,
					item_id,
					owner: owner.clone(),
					amount: position.amount,
					price: position.price,
					market_fee: position.market_fee,
					state: position.state,
				});
				Ok(())
			})?;
		} else if !balance.is_zero() {
			let position_id = Self::create_position(
				item_id,
				owner.clone(),
				balance,
				0,
				PositionState::Available,
			)?;
			<AvailablePositions<T>>::insert(item_id, owner, position_id);
		}
		Ok(())
	}

	/// Runs the settlement pipeline for a completed trade: royalty, then
	/// platform fee, then seller payout, then unit custody transfer.
	///
	/// The backing position (and sidecar data) must already be decreased or
	/// removed so custody never under-covers the remaining positions while
	/// value is moving out
	pub(crate) fn settle(
		position: &Position<T::AccountId>,
		token_id: TokenId,
		recipient: &T::AccountId,
		gross: Balance,
		units: Balance,
	) -> DispatchResult {
		let mut royalty_paid: Balance = 0;
		if T::SftLedger::supports_royalties() {
			if let Some((receiver, royalty)) = T::SftLedger::royalty_info(token_id, gross) {
				// royalty terms above half of gross are treated as
				// misconfigured and skipped, as is a self-royalty
				if !royalty.is_zero() && royalty <= gross / 2 && receiver != position.owner {
					Self::pay_or_credit(&receiver, royalty);
					royalty_paid = royalty;
					Self::deposit_event(Event::<T>::RoyaltiesPaid { token_id, value: royalty });
				}
			}
		}

		// fee applies to the post-royalty base so the royalty is not itself
		// taxed; rounding residue stays with the seller
		let mut fee: Balance = 0;
		if let Some(fee_to) = <FeeTo<T>>::get() {
			fee = position.market_fee.mul_floor(gross.saturating_sub(royalty_paid));
			Self::pay_or_credit(&fee_to, fee);
		}

		let net = gross.saturating_sub(royalty_paid).saturating_sub(fee);
		Self::pay_or_credit(&position.owner, net);

		Self::release_units(recipient, token_id, units)
	}

	/// Appends a completed sale to the item's history
	fn record_sale(item_id: ItemId, sale: ItemSale<T::AccountId>) -> DispatchResult {
		<ItemSales<T>>::try_append(item_id, sale).map_err(|_| Error::<T>::MaxSalesReached)?;
		Ok(())
	}

	/// Moves `value` from `who` into the custody account, aborting the
	/// operation on failure
	fn take_value(who: &T::AccountId, value: Balance) -> DispatchResult {
		T::Currency::transfer(who, &Self::account_id(), value, ExistenceRequirement::AllowDeath)
	}

	/// Returns `units` of `token_id` from custody to `to`
	fn release_units(to: &T::AccountId, token_id: TokenId, units: Balance) -> DispatchResult {
		T::SftLedger::transfer(&Self::account_id(), to, token_id, units)
	}

	/// Pays `amount` out of custody to `who`. A failed transfer credits the
	/// amount to `who`'s claimable balance instead of aborting
	pub(crate) fn pay_or_credit(who: &T::AccountId, amount: Balance) {
		if amount.is_zero() {
			return;
		}
		let result = T::Currency::transfer(
			&Self::account_id(),
			who,
			amount,
			ExistenceRequirement::AllowDeath,
		);
		if let Err(err) = result {
			log!(warn, "🃏 payout of {:?} to {:?} failed: {:?}", amount, who, err);
			<ClaimableBalances<T>>::mutate(who, |balance| {
				*balance = balance.saturating_add(amount)
			});
			Self::deposit_event(Event::<T>::PayoutDeferred { who: who.clone(), amount });
		}
	}

	/// Returns the item and its current positions, ascending by position id
	pub fn item_details(
		item_id: ItemId,
	) -> Result<(Item<T::AccountId>, Vec<(PositionId, Position<T::AccountId>)>), DispatchError> {
		let item = <Items<T>>::get(item_id).ok_or(Error::<T>::NotFound)?;
		let mut positions: Vec<(PositionId, Position<T::AccountId>)> =
			<Positions<T>>::iter().filter(|(_, position)| position.item_id == item_id).collect();
		positions.sort_by_key(|(position_id, _)| *position_id);
		Ok((item, positions))
	}

	/// Returns the position detail of a specified position_id
	pub fn position_details(
		position_id: PositionId,
	) -> Result<Position<T::AccountId>, DispatchError> {
		let Some(position) = <Positions<T>>::get(position_id) else {
			return Err(Error::<T>::NotFound.into());
		};
		Ok(position)
	}

	/// All positions in `state`, ascending by position id
	pub fn positions_by_state(state: PositionState) -> Vec<(PositionId, Position<T::AccountId>)> {
		let mut positions: Vec<(PositionId, Position<T::AccountId>)> =
			<Positions<T>>::iter().filter(|(_, position)| position.state == state).collect();
		positions.sort_by_key(|(position_id, _)| *position_id);
		positions
	}

	/// All positions owned by `who`, ascending by position id
	pub fn positions_by_owner(who: &T::AccountId) -> Vec<(PositionId, Position<T::AccountId>)> {
		let mut positions: Vec<(PositionId, Position<T::AccountId>)> =
			<Positions<T>>::iter().filter(|(_, position)| &position.owner == who).collect();
		positions.sort_by_key(|(position_id, _)| *position_id);
		positions
	}

	/// All items registered by `creator`, ascending by item id
	pub fn items_by_creator(creator: &T::AccountId) -> Vec<(ItemId, Item<T::AccountId>)> {
		let mut items: Vec<(ItemId, Item<T::AccountId>)> =
			<Items<T>>::iter().filter(|(_, item)| &item.creator == creator).collect();
		items.sort_by_key(|(item_id, _)| *item_id);
		items
	}
}
