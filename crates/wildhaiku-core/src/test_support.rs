//! Shared fixtures for unit tests.

use crate::dictionaries::SyllableDictionary;

/// A small CMU-format dictionary covering the words used in tests.
pub const DICTIONARY: &str = "\
;;; test fixture
this DH IH1 S
is IH1 Z
a AH0
haiku HH AY1 K UW0
haikus HH AY1 K UW0 Z
hope HH OW1 P
the DH AH0
test T EH1 S T
finds F AY1 N D Z
it IH1 T
alright AO2 L R AY1 T
i AY1
think TH IH1 NG K
that DH AE1 T
should SH UH1 D
no N OW1
here HH IY1 R
hi HH AY1
testing T EH1 S T IH0 NG
trim T R IH1 M
of AH1 V
both B OW1 TH
starting S T AA1 R T IH0 NG
and AH0 N D
trailing T R EY1 L IH0 NG
junk JH AH1 NG K
in IH0 N
same S EY1 M
sentence S EH1 N T AH0 N S
some S AH1 M
bad B AE1 D
text T EH1 K S T
not N AA1 T
such S AH1 CH
bold B OW1 L D
for F AO1 R
app AE1 P
would W UH1 D
love L AH1 V
if IH1 F
worked W ER1 K T
bill B IH1 L
barr B AA1 R
honey HH AH1 N IY0
badger B AE1 JH ER0
ain't EY1 N T
scared S K EH1 R D
nothing N AH1 TH IH0 NG
broad B R AO1 D
shoulders SH OW1 L D ER0 Z
loose L UW1 S
skin S K IH1 N
chuck CH AH1 K
schumer SH UW1 M ER0
don't D OW1 N T
care K EH1 R
he HH IY1
asked AE1 S K T
me M IY1
where W EH1 R
wanted W AO1 N T AH0 D
to T UW1
play P L EY1
told T OW1 L D
him HH IH1 M
want W AA1 N T
go G OW1
buffalo B AH1 F AH0 L OW2
we're W IY1 R
pumped P AH1 M P T
have HH AE1 V
you Y UW1
cody K OW1 D IY0
& AE1 N D
hmm
";

/// Parse [`DICTIONARY`].
pub fn dictionary() -> SyllableDictionary {
    SyllableDictionary::parse_str(DICTIONARY)
}
