//! Top-level voter eligibility gate
//!
//! ```text
//! signal input regionHash
//! signal input electionId
//! signal private input voterAddress
//! signal private input region
//! signal private input isRegistered
//! signal private input isEligible
//! signal output valid
//! signal output commitment
//!
//! component regCheck  = IsEqual()
//! component eligCheck = IsEqual()
//!
//! regCheck.in[0]  <== isRegistered
//! regCheck.in[1]  <== 1
//! eligCheck.in[0] <== isEligible
//! eligCheck.in[1] <== 1
//! valid           <== regCheck.out * eligCheck.out
//! commitment      <== voterAddress
//! ```
//!
//! `valid` is 1 iff both flags equal 1; `commitment` passes the voter
//! address through unchanged. `regionHash`, `electionId` and `region` take
//! part in the witness but not in this computation.

use crate::eval::{CalcContext, Procedure, WitnessError};
use crate::graph::{CircuitError, ComponentId, ComponentType};

use super::is_equal;

pub const TYPE_NAME: &str = "VoterEligibility";

/// Signal layout and sub-components of the main component type.
pub fn component_type() -> Result<ComponentType, CircuitError> {
    ComponentType::builder(TYPE_NAME)
        .public_input("regionHash", &[])
        .public_input("electionId", &[])
        .private_input("voterAddress", &[])
        .private_input("region", &[])
        .private_input("isRegistered", &[])
        .private_input("isEligible", &[])
        .output("valid", &[])
        .output("commitment", &[])
        .sub("regCheck", is_equal::TYPE_NAME)
        .sub("eligCheck", is_equal::TYPE_NAME)
        .build()
}

pub struct VoterEligibility;

impl Procedure for VoterEligibility {
    fn type_name(&self) -> &str {
        TYPE_NAME
    }

    fn run(&self, ctx: &mut CalcContext<'_>, comp: ComponentId) -> Result<(), WitnessError> {
        let reg_check = ctx.sub(comp, "regCheck")?;
        let elig_check = ctx.sub(comp, "eligCheck")?;

        // regCheck.in[0] <== isRegistered
        let is_registered = ctx.get(comp, "isRegistered")?;
        ctx.set_at(reg_check, "in", 0, is_registered)?;
        // regCheck.in[1] <== 1
        ctx.set_at(reg_check, "in", 1, ctx.one().clone())?;

        // eligCheck.in[0] <== isEligible
        let is_eligible = ctx.get(comp, "isEligible")?;
        ctx.set_at(elig_check, "in", 0, is_eligible)?;
        // eligCheck.in[1] <== 1
        ctx.set_at(elig_check, "in", 1, ctx.one().clone())?;

        // valid <== regCheck.out * eligCheck.out
        ctx.ensure_evaluated(reg_check)?;
        ctx.ensure_evaluated(elig_check)?;
        let valid = ctx.get(reg_check, "out")?.mul(&ctx.get(elig_check, "out")?);
        ctx.set(comp, "valid", valid)?;

        // commitment <== voterAddress
        let voter_address = ctx.get(comp, "voterAddress")?;
        ctx.set(comp, "commitment", voter_address)?;

        Ok(())
    }
}
