use crate::error::ExtractError;
use crate::filter;
use crate::listing;
use crate::parameters::Parameters;
use crate::toolchain::Toolchain;
use std::fs::File;
use std::io::Write;

pub fn extract(toolchain: &dyn Toolchain, parameters: &Parameters) -> Result<(), ExtractError> {
    toolchain.build(&parameters.profile)?;

    let listing = toolchain.list_entries()?;

    let first = parameters.start_index;
    let last = listing::last_entry_index(&listing).ok_or(ExtractError::NoEntries)?;

    if last < first {
        return Err(ExtractError::EmptyRange { first, last });
    }

    {
        // Accumulate the raw listings. A failed entry leaves the file
        // truncated at that point
        let mut output = File::create(&parameters.output_path)?;

        for index in first..=last {
            let text = toolchain.disassemble(&parameters.profile, index)?;

            output.write_all(text.as_bytes())?;
            output.write_all(b"\n\n")?;
        }
    }

    filter::rewrite_filtered(&parameters.output_path)?;

    Ok(())
}
