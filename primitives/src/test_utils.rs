#![cfg(feature = "std")]
use crate::*;
use frame_support::{sp_io, traits::GenesisBuild};
use sp_core::H160;

/// Generic TestExternalities builder to be used across all pallets
pub struct TestExt<T: frame_system::Config + pallet_balances::Config> {
	balances: Vec<(T::AccountId, <T as pallet_balances::Config>::Balance)>,
	block_number: BlockNumber,
}

impl<T> Default for TestExt<T>
where
	T: frame_system::Config + pallet_balances::Config,
	<T as pallet_balances::Config>::Balance: From<Balance>,
{
	/// Create new TestExt with default values
	fn default() -> Self {
		Self { balances: vec![], block_number: 1 }
	}
}

impl<T> TestExt<T>
where
	T: frame_system::Config + pallet_balances::Config,
	<T as frame_system::Config>::BlockNumber: From<u64>,
	<T as pallet_balances::Config>::Balance: From<Balance>,
	T::AccountId: From<H160>,
	<T as frame_system::Config>::Hash: From<[u8; 32]>,
{
	/// Configure some native token balances
	pub fn with_balances(
		mut self,
		balances: &[(T::AccountId, <T as pallet_balances::Config>::Balance)],
	) -> Self {
		self.balances = balances.to_vec();
		self
	}

	/// Configure starting block number
	pub fn with_block_number(mut self, block_number: BlockNumber) -> Self {
		self.block_number = block_number;
		self
	}

	/// Build the Test Externalities for general use across all pallets
	pub fn build(self) -> sp_io::TestExternalities {
		let mut ext = frame_system::GenesisConfig::default().build_storage::<T>().unwrap();

		// add initial balances to Genesis Config
		if !self.balances.is_empty() {
			pallet_balances::GenesisConfig::<T> { balances: self.balances }
				.assimilate_storage(&mut ext)
				.unwrap();
		}

		let mut ext: sp_io::TestExternalities = ext.into();
		ext.execute_with(|| {
			frame_system::Pallet::<T>::initialize(
				&(self.block_number as u64).into(),
				&[0u8; 32].into(),
				&Default::default(),
			)
		});

		ext
	}
}
