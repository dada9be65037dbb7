use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{OptionAdded, OwnershipTransferred, VoteOption},
};

/// Singleton holding the authority and the size of the option catalog.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    /// PDA bump seed
    pub bump: u8,
    /// The only key allowed to add options, register voters and hand over the role
    pub authority: Pubkey,
    /// Number of options ever added; option ids run from 1 to this value
    pub options_count: u32,
}

impl Registry {
    pub fn initialize(&mut self, authority: Pubkey, bump: u8) -> Result<OwnershipTransferred> {
        require_keys_neq!(authority, Pubkey::default(), ErrorCode::InvalidAddress);

        self.bump = bump;
        self.authority = authority;
        self.options_count = 0;

        Ok(OwnershipTransferred {
            previous_authority: Pubkey::default(),
            new_authority: authority,
        })
    }

    /// Whether `payer` is the upgrade authority recorded in the program data
    /// account. A program deployed without one can never be initialized.
    pub fn is_deployer(upgrade_authority: Option<Pubkey>, payer: &Pubkey) -> bool {
        upgrade_authority == Some(*payer)
    }

    pub fn is_authority(&self, address: &Pubkey) -> bool {
        self.authority == *address
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, ErrorCode::NotAuthority);
        Ok(())
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_authority: Pubkey,
    ) -> Result<OwnershipTransferred> {
        self.require_authority(caller)?;
        require_keys_neq!(new_authority, Pubkey::default(), ErrorCode::InvalidAddress);

        let previous_authority = self.authority;
        self.authority = new_authority;

        Ok(OwnershipTransferred {
            previous_authority,
            new_authority,
        })
    }

    /// Seed bytes of the option account the next `add_option` will create.
    ///
    /// Wraps at `u32::MAX` so account derivation never panics; `add_option`
    /// rejects the overflow itself.
    pub fn next_option_seed(&self) -> [u8; 4] {
        self.options_count.wrapping_add(1).to_le_bytes()
    }

    pub fn contains_option(&self, option_id: u32) -> bool {
        (1..=self.options_count).contains(&option_id)
    }

    pub fn require_option(&self, option_id: u32) -> Result<()> {
        require!(self.contains_option(option_id), ErrorCode::InvalidOption);
        Ok(())
    }

    /// Appends `option` to the catalog under the next sequential id.
    ///
    /// `option` must be the freshly created account for that id. Nothing is
    /// written unless the caller is the authority and the name is valid.
    pub fn add_option(
        &mut self,
        caller: &Pubkey,
        option: &mut VoteOption,
        name: &str,
        bump: u8,
    ) -> Result<OptionAdded> {
        self.require_authority(caller)?;
        let name = VoteOption::validate_name(name)?;
        let id = self
            .options_count
            .checked_add(1)
            .ok_or(error!(ErrorCode::CounterOverflow))?;

        option.bump = bump;
        option.id = id;
        option.name = name.to_string();
        option.vote_count = 0;
        self.options_count = id;

        Ok(OptionAdded {
            id,
            name: option.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::error_code;

    fn registry(authority: Pubkey) -> Registry {
        let mut registry = Registry::default();
        registry.initialize(authority, 254).unwrap();
        registry
    }

    #[test]
    fn initialize_records_the_initializer() {
        let authority = Pubkey::new_unique();
        let mut registry = Registry::default();

        let event = registry.initialize(authority, 254).unwrap();

        assert_eq!(registry.authority, authority);
        assert_eq!(registry.options_count, 0);
        assert_eq!(
            event,
            OwnershipTransferred {
                previous_authority: Pubkey::default(),
                new_authority: authority,
            }
        );
    }

    #[test]
    fn only_the_upgrade_authority_may_initialize() {
        let deployer = Pubkey::new_unique();
        let watcher = Pubkey::new_unique();

        assert!(Registry::is_deployer(Some(deployer), &deployer));
        assert!(!Registry::is_deployer(Some(deployer), &watcher));
        assert!(!Registry::is_deployer(None, &deployer));
    }

    #[test]
    fn transfer_by_authority_moves_the_role() {
        let owner = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut registry = registry(owner);

        let event = registry.transfer_ownership(&owner, next).unwrap();

        assert!(registry.is_authority(&next));
        assert!(!registry.is_authority(&owner));
        assert_eq!(event.previous_authority, owner);
        assert_eq!(event.new_authority, next);
    }

    #[test]
    fn transfer_by_stranger_is_rejected() {
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut registry = registry(owner);

        let err = registry
            .transfer_ownership(&stranger, Pubkey::new_unique())
            .unwrap_err();

        assert_eq!(error_code(err), u32::from(ErrorCode::NotAuthority));
        assert_eq!(registry.authority, owner);
    }

    #[test]
    fn transfer_to_default_pubkey_is_rejected() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);

        let err = registry
            .transfer_ownership(&owner, Pubkey::default())
            .unwrap_err();

        assert_eq!(error_code(err), u32::from(ErrorCode::InvalidAddress));
        assert_eq!(registry.authority, owner);
    }

    #[test]
    fn old_authority_loses_access_after_transfer() {
        let owner = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut registry = registry(owner);
        registry.transfer_ownership(&owner, next).unwrap();

        let mut option = VoteOption::default();
        let err = registry
            .add_option(&owner, &mut option, "Alpha", 255)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(ErrorCode::NotAuthority));

        registry.add_option(&next, &mut option, "Alpha", 255).unwrap();
        assert_eq!(registry.options_count, 1);
    }

    #[test]
    fn options_get_sequential_ids() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);

        let names = ["Alpha", "Beta", "Gamma"];
        let options: Vec<VoteOption> = names
            .iter()
            .map(|name| {
                let mut option = VoteOption::default();
                let event = registry.add_option(&owner, &mut option, name, 250).unwrap();
                assert_eq!(event.id, option.id);
                option
            })
            .collect();

        assert_eq!(registry.options_count, 3);
        for (i, option) in options.iter().enumerate() {
            assert_eq!(option.id, i as u32 + 1);
            assert_eq!(option.name, names[i]);
            assert_eq!(option.vote_count, 0);
        }
    }

    #[test]
    fn stranger_cannot_add_options() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);
        let mut option = VoteOption::default();

        let err = registry
            .add_option(&Pubkey::new_unique(), &mut option, "Illegal", 255)
            .unwrap_err();

        assert_eq!(error_code(err), u32::from(ErrorCode::NotAuthority));
        assert_eq!(registry.options_count, 0);
        assert_eq!(option, VoteOption::default());
    }

    #[test]
    fn blank_names_are_rejected_without_consuming_an_id() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);
        let mut option = VoteOption::default();

        let err = registry.add_option(&owner, &mut option, "   ", 255).unwrap_err();

        assert_eq!(error_code(err), u32::from(ErrorCode::EmptyName));
        assert_eq!(registry.options_count, 0);
    }

    #[test]
    fn option_names_are_trimmed() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);
        let mut option = VoteOption::default();

        let event = registry
            .add_option(&owner, &mut option, "  Alpha  ", 255)
            .unwrap();

        assert_eq!(option.name, "Alpha");
        assert_eq!(event.name, "Alpha");
    }

    #[test]
    fn option_range_follows_the_count() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);
        assert!(!registry.contains_option(1));

        registry
            .add_option(&owner, &mut VoteOption::default(), "Alpha", 255)
            .unwrap();

        assert!(!registry.contains_option(0));
        assert!(registry.contains_option(1));
        assert!(!registry.contains_option(2));
        assert_eq!(registry.next_option_seed(), 2u32.to_le_bytes());
    }

    #[test]
    fn full_catalog_reports_overflow() {
        let owner = Pubkey::new_unique();
        let mut registry = registry(owner);
        registry.options_count = u32::MAX;

        assert_eq!(registry.next_option_seed(), 0u32.to_le_bytes());
        let err = registry
            .add_option(&owner, &mut VoteOption::default(), "Overflow", 255)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(ErrorCode::CounterOverflow));
        assert_eq!(registry.options_count, u32::MAX);
    }
}
