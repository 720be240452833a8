mod chain_config;
mod genesis;
mod system_config;
