// This file is part of Substrate.

// Copyright (C) 2022 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Autogenerated weights for pallet_marketplace
//!
//! THIS FILE WAS AUTO-GENERATED USING THE SUBSTRATE BENCHMARK CLI VERSION 4.0.0-dev
//! DATE: 2024-06-11, STEPS: `50`, REPEAT: 20, LOW RANGE: `[]`, HIGH RANGE: `[]`
//! HOSTNAME: `ip-172-31-102-147`, CPU: `Intel(R) Xeon(R) CPU E5-2686 v4 @ 2.30GHz`
//! EXECUTION: , WASM-EXECUTION: Compiled, CHAIN: Some("dev"), DB CACHE: 1024

// Executed Command:
// ./target/release/trove
// benchmark
// pallet
// --chain=dev
// --steps=50
// --repeat=20
// --pallet=pallet-marketplace
// --extrinsic=*
// --wasm-execution=compiled
// --heap-pages=4096
// --output
// ./pallet/marketplace/src/weights.rs
// --template
// ./scripts/pallet_template.hbs

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for pallet_marketplace.
pub trait WeightInfo {
	fn create_item() -> Weight;
	fn sell() -> Weight;
	fn buy() -> Weight;
	fn cancel_sale() -> Weight;
	fn auction() -> Weight;
	fn bid() -> Weight;
	fn end_auction() -> Weight;
	fn raffle() -> Weight;
	fn enter_raffle() -> Weight;
	fn end_raffle() -> Weight;
	fn create_loan() -> Weight;
	fn fund_loan() -> Weight;
	fn repay_loan() -> Weight;
	fn liquidate_loan() -> Weight;
	fn cancel_loan() -> Weight;
	fn withdraw() -> Weight;
	fn set_market_fee() -> Weight;
	fn set_fee_to() -> Weight;
}

/// Weights for pallet_marketplace using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
	// Storage: `Marketplace::ItemLookup` (r:1 w:1)
	// Proof: `Marketplace::ItemLookup` (`max_values`: None, `max_size`: Some(32), added: 2507, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextItemId` (r:1 w:1)
	// Proof: `Marketplace::NextItemId` (`max_values`: Some(1), `max_size`: Some(8), added: 503, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:0 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	fn create_item() -> Weight {
		Weight::from_all(52_341_000_u64)
			.saturating_add(T::DbWeight::get().reads(2_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::MarketFee` (r:1 w:0)
	// Proof: `Marketplace::MarketFee` (`max_values`: Some(1), `max_size`: Some(4), added: 499, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Positions` (r:1 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	fn sell() -> Weight {
		Weight::from_all(98_472_000_u64)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::ItemSales` (r:1 w:1)
	// Proof: `Marketplace::ItemSales` (`max_values`: None, `max_size`: Some(7210), added: 9685, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::FeeTo` (r:1 w:0)
	// Proof: `Marketplace::FeeTo` (`max_values`: Some(1), `max_size`: Some(21), added: 516, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:3 w:3)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn buy() -> Weight {
		Weight::from_all(186_927_000_u64)
			.saturating_add(T::DbWeight::get().reads(10_u64))
			.saturating_add(T::DbWeight::get().writes(9_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn cancel_sale() -> Weight {
		Weight::from_all(121_553_000_u64)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(5_u64))
	}
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::MarketFee` (r:1 w:0)
	// Proof: `Marketplace::MarketFee` (`max_values`: Some(1), `max_size`: Some(4), added: 499, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Positions` (r:1 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AuctionData` (r:0 w:1)
	// Proof: `Marketplace::AuctionData` (`max_values`: None, `max_size`: Some(77), added: 2552, mode: `MaxEncodedLen`)
	fn auction() -> Weight {
		Weight::from_all(102_816_000_u64)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
	// Storage: `Marketplace::Positions` (r:1 w:0)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AuctionData` (r:1 w:1)
	// Proof: `Marketplace::AuctionData` (`max_values`: None, `max_size`: Some(77), added: 2552, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:2 w:2)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	fn bid() -> Weight {
		Weight::from_all(113_204_000_u64)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AuctionData` (r:1 w:1)
	// Proof: `Marketplace::AuctionData` (`max_values`: None, `max_size`: Some(77), added: 2552, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::ItemSales` (r:1 w:1)
	// Proof: `Marketplace::ItemSales` (`max_values`: None, `max_size`: Some(7210), added: 9685, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::FeeTo` (r:1 w:0)
	// Proof: `Marketplace::FeeTo` (`max_values`: Some(1), `max_size`: Some(21), added: 516, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:3 w:3)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn end_auction() -> Weight {
		Weight::from_all(226_518_000_u64)
			.saturating_add(T::DbWeight::get().reads(11_u64))
			.saturating_add(T::DbWeight::get().writes(10_u64))
	}
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::MarketFee` (r:1 w:0)
	// Proof: `Marketplace::MarketFee` (`max_values`: Some(1), `max_size`: Some(4), added: 499, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Positions` (r:1 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::RaffleData` (r:0 w:1)
	// Proof: `Marketplace::RaffleData` (`max_values`: None, `max_size`: Some(3653), added: 6128, mode: `MaxEncodedLen`)
	fn raffle() -> Weight {
		Weight::from_all(100_494_000_u64)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
	// Storage: `Marketplace::Positions` (r:1 w:0)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::RaffleData` (r:1 w:1)
	// Proof: `Marketplace::RaffleData` (`max_values`: None, `max_size`: Some(3653), added: 6128, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:2 w:2)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	fn enter_raffle() -> Weight {
		Weight::from_all(109_371_000_u64)
			.saturating_add(T::DbWeight::get().reads(4_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::RaffleData` (r:1 w:1)
	// Proof: `Marketplace::RaffleData` (`max_values`: None, `max_size`: Some(3653), added: 6128, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::ItemSales` (r:1 w:1)
	// Proof: `Marketplace::ItemSales` (`max_values`: None, `max_size`: Some(7210), added: 9685, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::FeeTo` (r:1 w:0)
	// Proof: `Marketplace::FeeTo` (`max_values`: Some(1), `max_size`: Some(21), added: 516, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:3 w:3)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn end_raffle() -> Weight {
		Weight::from_all(231_042_000_u64)
			.saturating_add(T::DbWeight::get().reads(11_u64))
			.saturating_add(T::DbWeight::get().writes(10_u64))
	}
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::MarketFee` (r:1 w:0)
	// Proof: `Marketplace::MarketFee` (`max_values`: Some(1), `max_size`: Some(4), added: 499, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Positions` (r:1 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::LoanData` (r:0 w:1)
	// Proof: `Marketplace::LoanData` (`max_values`: None, `max_size`: Some(81), added: 2556, mode: `MaxEncodedLen`)
	fn create_loan() -> Weight {
		Weight::from_all(101_228_000_u64)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
	// Storage: `Marketplace::Positions` (r:1 w:0)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::LoanData` (r:1 w:1)
	// Proof: `Marketplace::LoanData` (`max_values`: None, `max_size`: Some(81), added: 2556, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:3 w:3)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	fn fund_loan() -> Weight {
		Weight::from_all(131_662_000_u64)
			.saturating_add(T::DbWeight::get().reads(5_u64))
			.saturating_add(T::DbWeight::get().writes(4_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::LoanData` (r:1 w:1)
	// Proof: `Marketplace::LoanData` (`max_values`: None, `max_size`: Some(81), added: 2556, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:3 w:3)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn repay_loan() -> Weight {
		Weight::from_all(196_184_000_u64)
			.saturating_add(T::DbWeight::get().reads(9_u64))
			.saturating_add(T::DbWeight::get().writes(9_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::LoanData` (r:1 w:1)
	// Proof: `Marketplace::LoanData` (`max_values`: None, `max_size`: Some(81), added: 2556, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn liquidate_loan() -> Weight {
		Weight::from_all(161_390_000_u64)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
	// Storage: `Marketplace::Positions` (r:2 w:2)
	// Proof: `Marketplace::Positions` (`max_values`: None, `max_size`: Some(89), added: 2564, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::LoanData` (r:1 w:1)
	// Proof: `Marketplace::LoanData` (`max_values`: None, `max_size`: Some(81), added: 2556, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::Items` (r:1 w:1)
	// Proof: `Marketplace::Items` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::AvailablePositions` (r:1 w:1)
	// Proof: `Marketplace::AvailablePositions` (`max_values`: None, `max_size`: Some(44), added: 2519, mode: `MaxEncodedLen`)
	// Storage: `Marketplace::NextPositionId` (r:1 w:1)
	// Proof: `Marketplace::NextPositionId` (`max_values`: Some(1), `max_size`: Some(16), added: 511, mode: `MaxEncodedLen`)
	fn cancel_loan() -> Weight {
		Weight::from_all(140_935_000_u64)
			.saturating_add(T::DbWeight::get().reads(6_u64))
			.saturating_add(T::DbWeight::get().writes(6_u64))
	}
	// Storage: `Marketplace::ClaimableBalances` (r:1 w:1)
	// Proof: `Marketplace::ClaimableBalances` (`max_values`: None, `max_size`: Some(52), added: 2527, mode: `MaxEncodedLen`)
	// Storage: `System::Account` (r:2 w:2)
	// Proof: `System::Account` (`max_values`: None, `max_size`: Some(116), added: 2591, mode: `MaxEncodedLen`)
	fn withdraw() -> Weight {
		Weight::from_all(76_213_000_u64)
			.saturating_add(T::DbWeight::get().reads(3_u64))
			.saturating_add(T::DbWeight::get().writes(3_u64))
	}
	// Storage: `Marketplace::MarketFee` (r:1 w:1)
	// Proof: `Marketplace::MarketFee` (`max_values`: Some(1), `max_size`: Some(4), added: 499, mode: `MaxEncodedLen`)
	fn set_market_fee() -> Weight {
		Weight::from_all(26_147_000_u64)
			.saturating_add(T::DbWeight::get().reads(1_u64))
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
	// Storage: `Marketplace::FeeTo` (r:0 w:1)
	// Proof: `Marketplace::FeeTo` (`max_values`: Some(1), `max_size`: Some(21), added: 516, mode: `MaxEncodedLen`)
	fn set_fee_to() -> Weight {
		Weight::from_all(24_108_000_u64)
			.saturating_add(T::DbWeight::get().writes(1_u64))
	}
}

// For backwards compatibility and tests
impl WeightInfo for () {
	fn create_item() -> Weight {
		Weight::from_all(52_341_000_u64)
			.saturating_add(RocksDbWeight::get().reads(2_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn sell() -> Weight {
		Weight::from_all(98_472_000_u64)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn buy() -> Weight {
		Weight::from_all(186_927_000_u64)
			.saturating_add(RocksDbWeight::get().reads(10_u64))
			.saturating_add(RocksDbWeight::get().writes(9_u64))
	}
	fn cancel_sale() -> Weight {
		Weight::from_all(121_553_000_u64)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(5_u64))
	}
	fn auction() -> Weight {
		Weight::from_all(102_816_000_u64)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
	fn bid() -> Weight {
		Weight::from_all(113_204_000_u64)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn end_auction() -> Weight {
		Weight::from_all(226_518_000_u64)
			.saturating_add(RocksDbWeight::get().reads(11_u64))
			.saturating_add(RocksDbWeight::get().writes(10_u64))
	}
	fn raffle() -> Weight {
		Weight::from_all(100_494_000_u64)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
	fn enter_raffle() -> Weight {
		Weight::from_all(109_371_000_u64)
			.saturating_add(RocksDbWeight::get().reads(4_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn end_raffle() -> Weight {
		Weight::from_all(231_042_000_u64)
			.saturating_add(RocksDbWeight::get().reads(11_u64))
			.saturating_add(RocksDbWeight::get().writes(10_u64))
	}
	fn create_loan() -> Weight {
		Weight::from_all(101_228_000_u64)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
	fn fund_loan() -> Weight {
		Weight::from_all(131_662_000_u64)
			.saturating_add(RocksDbWeight::get().reads(5_u64))
			.saturating_add(RocksDbWeight::get().writes(4_u64))
	}
	fn repay_loan() -> Weight {
		Weight::from_all(196_184_000_u64)
			.saturating_add(RocksDbWeight::get().reads(9_u64))
			.saturating_add(RocksDbWeight::get().writes(9_u64))
	}
	fn liquidate_loan() -> Weight {
		Weight::from_all(161_390_000_u64)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
	fn cancel_loan() -> Weight {
		Weight::from_all(140_935_000_u64)
			.saturating_add(RocksDbWeight::get().reads(6_u64))
			.saturating_add(RocksDbWeight::get().writes(6_u64))
	}
	fn withdraw() -> Weight {
		Weight::from_all(76_213_000_u64)
			.saturating_add(RocksDbWeight::get().reads(3_u64))
			.saturating_add(RocksDbWeight::get().writes(3_u64))
	}
	fn set_market_fee() -> Weight {
		Weight::from_all(26_147_000_u64)
			.saturating_add(RocksDbWeight::get().reads(1_u64))
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
	fn set_fee_to() -> Weight {
		Weight::from_all(24_108_000_u64)
			.saturating_add(RocksDbWeight::get().writes(1_u64))
	}
}
