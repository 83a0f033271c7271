// src/wallet.rs

//! Wallet implementation over a single seed.

use crate::account::{Account, AccountId};
use crate::errors::{Result, WalletError};
use vela_crypto::Seed;

/// Main wallet structure
///
/// Holds one seed and the accounts derived from it. Accounts are
/// re-derivable at any time, so the seed is the only state that needs
/// backing up.
#[derive(Clone)]
pub struct Wallet {
    /// The wallet seed
    seed: Seed,

    /// Accounts derived so far
    accounts: Vec<Account>,

    /// Active account index into `accounts`
    active_account: usize,
}

impl Wallet {
    /// Creates an empty wallet over a seed
    ///
    /// # Example
    /// ```
    /// use vela_crypto::Seed;
    /// use vela_wallet::Wallet;
    ///
    /// let wallet = Wallet::new(Seed::from_passphrase("masterpassphrase"));
    /// assert_eq!(wallet.account_count(), 0);
    /// ```
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            accounts: Vec::new(),
            active_account: 0,
        }
    }

    /// Creates a wallet from a freshly generated random seed
    pub fn generate() -> Self {
        Self::new(Seed::random())
    }

    /// Creates a wallet from a passphrase
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::new(Seed::from_passphrase(passphrase))
    }

    /// Creates a wallet from a family-seed string
    pub fn from_base58(text: &str) -> Result<Self> {
        Ok(Self::new(Seed::from_base58(text)?))
    }

    /// Gets the wallet seed
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Derives the account for an index and adds it to the wallet
    ///
    /// # Arguments
    /// * `index` - Account index to derive
    ///
    /// # Returns
    /// The newly derived account
    pub fn derive_account(&mut self, index: u32) -> Result<&Account> {
        self.add_account(AccountId::Index(index))
    }

    /// Derives the root account and adds it to the wallet
    pub fn derive_root_account(&mut self) -> Result<&Account> {
        self.add_account(AccountId::Root)
    }

    fn add_account(&mut self, id: AccountId) -> Result<&Account> {
        if self.accounts.iter().any(|a| a.id() == id) {
            return Err(WalletError::AccountExists(id.to_string()));
        }

        let account = match id {
            AccountId::Root => Account::derive_root(&self.seed)?,
            AccountId::Index(index) => Account::derive(&self.seed, index)?,
        };

        self.accounts.push(account);
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Gets an account by identity
    pub fn get_account(&self, id: AccountId) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| WalletError::AccountNotFound(id.to_string()))
    }

    /// Gets the currently active account
    pub fn get_active_account(&self) -> Result<&Account> {
        self.accounts
            .get(self.active_account)
            .ok_or_else(|| WalletError::AccountNotFound("No active account".to_string()))
    }

    /// Sets the active account by identity
    pub fn set_active_account(&mut self, id: AccountId) -> Result<()> {
        let position = self
            .accounts
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| WalletError::AccountNotFound(id.to_string()))?;

        self.active_account = position;
        Ok(())
    }

    /// Gets the number of derived accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Lists the identities of all derived accounts
    pub fn account_ids(&self) -> Vec<AccountId> {
        self.accounts.iter().map(|a| a.id()).collect()
    }

    /// Lists the addresses of all derived accounts
    pub fn list_addresses(&self) -> Vec<String> {
        self.accounts
            .iter()
            .map(|a| a.address().to_string())
            .collect()
    }

    /// Signs a message digest with the active account
    pub fn sign(&self, digest: &[u8]) -> Result<Vec<u8>> {
        self.get_active_account()?.sign(digest)
    }

    /// Verifies a signature against the active account
    pub fn verify(&self, digest: &[u8], signature: &[u8]) -> Result<bool> {
        Ok(self.get_active_account()?.verify(digest, signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_creation() {
        let wallet = Wallet::from_passphrase("test wallet");
        assert_eq!(wallet.account_count(), 0);
        assert!(wallet.get_active_account().is_err());
    }

    #[test]
    fn test_derive_account() {
        let mut wallet = Wallet::from_passphrase("test wallet");
        wallet.derive_account(0).unwrap();
        assert_eq!(wallet.account_count(), 1);
    }

    #[test]
    fn test_duplicate_account() {
        let mut wallet = Wallet::from_passphrase("test wallet");
        wallet.derive_account(0).unwrap();

        let result = wallet.derive_account(0);
        assert!(matches!(result, Err(WalletError::AccountExists(_))));
    }

    #[test]
    fn test_root_and_index_coexist() {
        let mut wallet = Wallet::from_passphrase("test wallet");
        wallet.derive_root_account().unwrap();
        wallet.derive_account(0).unwrap();

        assert_eq!(wallet.account_count(), 2);
        assert_ne!(
            wallet.get_account(AccountId::Root).unwrap().address(),
            wallet.get_account(AccountId::Index(0)).unwrap().address()
        );
    }

    #[test]
    fn test_set_active_account() {
        let mut wallet = Wallet::from_passphrase("test wallet");
        wallet.derive_account(0).unwrap();
        wallet.derive_account(1).unwrap();

        wallet.set_active_account(AccountId::Index(1)).unwrap();
        assert_eq!(
            wallet.get_active_account().unwrap().id(),
            AccountId::Index(1)
        );
    }

    #[test]
    fn test_set_active_account_unknown() {
        let mut wallet = Wallet::from_passphrase("test wallet");
        wallet.derive_account(0).unwrap();

        let result = wallet.set_active_account(AccountId::Index(9));
        assert!(matches!(result, Err(WalletError::AccountNotFound(_))));
    }

    #[test]
    fn test_sign_verify_with_active_account() {
        let mut wallet = Wallet::from_passphrase("signing wallet");
        wallet.derive_account(0).unwrap();

        let digest = vela_crypto::hash::sha512_half(b"transaction digest");
        let signature = wallet.sign(&digest).unwrap();
        assert!(wallet.verify(&digest, &signature).unwrap());
    }

    #[test]
    fn test_restored_wallet_matches() {
        let mut wallet = Wallet::generate();
        wallet.derive_account(0).unwrap();
        let text = wallet.seed().to_base58();

        let mut restored = Wallet::from_base58(&text).unwrap();
        restored.derive_account(0).unwrap();

        assert_eq!(wallet.list_addresses(), restored.list_addresses());
    }

    #[test]
    fn test_account_ids_order() {
        let mut wallet = Wallet::from_passphrase("ordering");
        wallet.derive_account(2).unwrap();
        wallet.derive_root_account().unwrap();
        wallet.derive_account(0).unwrap();

        assert_eq!(
            wallet.account_ids(),
            vec![AccountId::Index(2), AccountId::Root, AccountId::Index(0)]
        );
    }
}
