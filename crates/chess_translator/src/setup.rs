//! Starting position used when a session begins without an input file.

/// The standard 32-piece opening position as placement directives.
pub const STANDARD: &str = "\
// White
Rla1
Nlb1
Blc1
Qld1
Kle1
Blf1
Nlg1
Rlh1
Pla2
Plb2
Plc2
Pld2
Ple2
Plf2
Plg2
Plh2
// Black
rda8
ndb8
bdc8
qdd8
kde8
bdf8
ndg8
rdh8
pda7
pdb7
pdc7
pdd7
pde7
pdf7
pdg7
pdh7
";
