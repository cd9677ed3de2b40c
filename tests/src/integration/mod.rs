//! Cross-component flows over real MSP directories and the default assembler

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod genesis_flow;
#[cfg(test)]
mod properties;
