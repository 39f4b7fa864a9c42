pub mod classic;
pub mod erdos_renyi;
