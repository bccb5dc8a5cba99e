//! Builders for each wrap-program instruction.
//!
//! Each operation has a typed account struct whose fields are the declared
//! accounts in declared order, so a missing, extra or reordered account is a
//! compile error. Flags always come from [`crate::schema`].

pub mod initialize;
pub mod unwrap;
pub mod wrap;

use ctw_primitives::{Address, Instruction};

use crate::data::CtwInstructionData;
use crate::error::CtwError;
use crate::schema::schema_for;
use crate::PROGRAM_ID;

fn build_instruction(
    addresses: &[Address],
    data: CtwInstructionData,
) -> Result<Instruction, CtwError> {
    let schema = schema_for(data.operation());
    let accounts = schema.account_metas(addresses)?;
    schema.check_accounts(&accounts)?;
    let data = data.pack()?;

    tracing::debug!(
        operation = schema.name,
        accounts = accounts.len(),
        data_len = data.len(),
        "built instruction"
    );

    Ok(Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    })
}

/// Decode and check an instruction that claims to target the wrap program.
///
/// Verifies the program ID, decodes the data, and checks the account list
/// against the decoded operation's schema.
pub fn parse_instruction(ix: &Instruction) -> Result<CtwInstructionData, CtwError> {
    if ix.program_id != PROGRAM_ID {
        return Err(CtwError::InvalidInstructionData(format!(
            "instruction targets {}, not {PROGRAM_ID}",
            ix.program_id
        )));
    }

    let data = CtwInstructionData::unpack(&ix.data)?;
    schema_for(data.operation()).check_accounts(&ix.accounts)?;
    Ok(data)
}
