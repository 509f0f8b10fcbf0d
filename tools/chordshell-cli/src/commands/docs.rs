//! Print links to the ChordPro documentation and community.

pub fn run() -> anyhow::Result<()> {
    println!("ChordPro File Format  https://www.chordpro.org/chordpro/");
    println!("ChordPro Community    https://groups.io/g/ChordPro");
    println!("ChordPro on GitHub    https://github.com/ChordPro/chordpro");
    Ok(())
}
