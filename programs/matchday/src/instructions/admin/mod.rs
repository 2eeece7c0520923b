pub mod init_config;
pub mod update_config;
pub mod pause;
pub mod transfer_admin;
pub mod update_collateral_mint;

pub use init_config::*;
pub use update_config::*;
pub use pause::*;
pub use transfer_admin::*;
pub use update_collateral_mint::*;
