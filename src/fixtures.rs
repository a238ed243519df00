//! Parsed sentences shared by the unit tests

use crate::notation::parse_tree;
use crate::tree::ParseNode;

pub fn tree(notation: &str) -> ParseNode {
    parse_tree(notation).unwrap()
}

/// Federer hired Annacone as his coach.
pub const FEDERER_COACH: &str = "
(hired/VBD
    (nsubj Federer/NNP)
    (dobj Annacone/NNP)
    (prep as/IN (pobj coach/NN (poss his/PRP$)))
    (punct ./.))";

/// Federer hired Annacone as his coach and business partner and as a best friend.
pub const FEDERER_PARTNER: &str = "
(hired/VBD
    (nsubj Federer/NNP)
    (dobj Annacone/NNP)
    (prep as/IN
        (pobj coach/NN (poss his/PRP$) (cc and/CC) (conj partner/NN (nn business/NN)))
        (cc and/CC)
        (conj as/IN (pobj friend/NN (det a/DT) (amod best/JJS))))
    (punct ./.))";

/// Annacone coached Federer to win multiple Wimbledon Championships, and in
/// turn became his best friend.
pub const ANNACONE_COACHED: &str = "
(coached/VBD
    (nsubj Annacone/NNP)
    (dobj Federer/NNP)
    (xcomp win/VB
        (aux to/TO)
        (dobj Championships/NNPS (amod multiple/JJ) (nn Wimbledon/NNP)))
    (punct ,/,)
    (cc and/CC)
    (conj became/VBD
        (prep in/IN (pobj turn/NN))
        (xcomp friend/NN (poss his/PRP$) (amod best/JJS)))
    (punct ./.))";

/// Annacone was hired as Federer's coach.
pub const ANNACONE_HIRED: &str = "
(hired/VBN
    (nsubjpass Annacone/NNP)
    (auxpass was/VBD)
    (prep as/IN (pobj coach/NN (poss Federer/NNP (possessive 's/POS))))
    (punct ./.))";

/// Bojack Horseman resides in Hollywoo, California, and worked on Horsing Around.
pub const BOJACK: &str = "
(resides/VBZ
    (nsubj Horseman/NNP (nn Bojack/NNP))
    (prep in/IN (pobj Hollywoo/NNP (punct ,/,) (appos California/NNP) (punct ,/,)))
    (cc and/CC)
    (conj worked/VBD (prep on/IN (pobj Around/NNP (nn Horsing/NNP))))
    (punct ./.))";

/// Harry was born September 4, 1946.
pub const HARRY_BORN: &str = "
(born/VBN
    (nsubjpass Harry/NNP)
    (auxpass was/VBD)
    (tmod September/NNP (num 4/CD) (punct ,/,) (num 1946/CD))
    (punct ./.))";

/// Harry is married to Mary and has two children.
pub const HARRY_MARRIED: &str = "
(married/JJ
    (nsubj Harry/NNP)
    (cop is/VBZ)
    (prep to/TO (pobj Mary/NNP))
    (cc and/CC)
    (conj has/VBZ (dobj children/NNS (num two/CD)))
    (punct ./.))";

/// Harry graduated from Maryville High School, completed his undergraduate
/// work as a Speech and Communication major at Carson Newman College, and got
/// his graduate degree from the University of Tennessee, Knoxville.
pub const HARRY_GRADUATED: &str = "
(graduated/VBD
    (nsubj Harry/NNP)
    (prep from/IN (pobj School/NNP (nn Maryville/NNP) (nn High/NNP)))
    (punct ,/,)
    (conj completed/VBD
        (dobj work/NN
            (poss his/PRP$)
            (amod undergraduate/JJ)
            (prep as/IN
                (pobj major/NN
                    (det a/DT)
                    (nn Speech/NNP (cc and/CC) (conj Communication/NNP))
                    (prep at/IN (pobj College/NNP (nn Carson/NNP) (nn Newman/NNP)))))))
    (punct ,/,)
    (cc and/CC)
    (conj got/VBD
        (dobj degree/NN (poss his/PRP$) (nn graduate/NN))
        (prep from/IN
            (pobj University/NNP
                (det the/DT)
                (prep of/IN (pobj Tennessee/NNP))
                (punct ,/,)
                (appos Knoxville/NNP))))
    (punct ./.))";

/// Harry retired from law enforcement and was a business employer before
/// pursuing politics.
pub const HARRY_RETIRED: &str = "
(retired/VBD
    (nsubj Harry/NNP)
    (prep from/IN (pobj enforcement/NN (nn law/NN)))
    (cc and/CC)
    (conj employer/NN
        (cop was/VBD)
        (det a/DT)
        (nn business/NN)
        (prep before/IN (pcomp pursuing/VBG (dobj politics/NNS))))
    (punct ./.))";

/// Harry died at St. Vincent's hospital in Indianapolis.
pub const HARRY_DIED: &str = "
(died/VBD
    (nsubj Harry/NNP)
    (prep at/IN
        (pobj hospital/NN
            (poss Vincent/NNP (nn St./NNP) (possessive 's/POS))
            (prep in/IN (pobj Indianapolis/NNP))))
    (punct ./.))";

/// After a brief stint as a teacher at Manchester Grammar School, Stapledon
/// worked in Port Tortilla and Liverpool from 1910 to 1913.
///
/// Simplified from the sentence in `STAPLEDON_OFFICES` so that the places
/// hang directly off the verb.
pub const STAPLEDON_WORKED: &str = "
(worked/VBD
    (prep After/IN
        (pobj stint/NN
            (det a/DT)
            (amod brief/JJ)
            (prep as/IN
                (pobj teacher/NN
                    (det a/DT)
                    (prep at/IN (pobj School/NNP (nn Manchester/NNP) (nn Grammar/NNP)))))))
    (punct ,/,)
    (nsubj Stapledon/NNP)
    (prep in/IN (pobj Tortilla/NNP (nn Port/NNP) (cc and/CC) (conj Liverpool/NNP)))
    (prep from/IN (pobj 1910/CD))
    (prep to/TO (pobj 1913/CD))
    (punct ./.))";

/// Stapledon was born in Seacombe, Wallasey, the only son of William Clibbert
/// Stapledon and Emmeline Miller, on the Wirral Peninsula near Liverpool.
///
/// Reordered from "... born in Seacombe, Wallasey, on the Wirral Peninsula
/// near Liverpool, the only son of ..." so that the apposition attaches to
/// Seacombe.
pub const STAPLEDON_BORN: &str = "
(born/VBN
    (nsubjpass Stapledon/NNP)
    (auxpass was/VBD)
    (prep in/IN
        (pobj Seacombe/NNP
            (punct ,/,)
            (appos Wallasey/NNP)
            (punct ,/,)
            (appos son/NN
                (det the/DT)
                (amod only/JJ)
                (prep of/IN
                    (pobj Stapledon/NNP
                        (nn William/NNP)
                        (nn Clibbert/NNP)
                        (cc and/CC)
                        (conj Miller/NNP (nn Emmeline/NNP)))))))
    (prep on/IN
        (pobj Peninsula/NNP (det the/DT) (nn Wirral/NNP) (prep near/IN (pobj Liverpool/NNP))))
    (punct ./.))";

/// After a brief stint as a teacher at Manchester Grammar School, Stapledon
/// worked in shipping offices in Liverpool and Port Tortilla from 1910 to 1913.
pub const STAPLEDON_OFFICES: &str = "
(worked/VBD
    (prep After/IN
        (pobj stint/NN
            (det a/DT)
            (amod brief/JJ)
            (prep as/IN
                (pobj teacher/NN
                    (det a/DT)
                    (prep at/IN (pobj School/NNP (nn Manchester/NNP) (nn Grammar/NNP)))))))
    (punct ,/,)
    (nsubj Stapledon/NNP)
    (prep in/IN
        (pobj offices/NNS
            (nn shipping/NN)
            (prep in/IN (pobj Liverpool/NNP (cc and/CC) (conj Tortilla/NNP (nn Port/NNP))))))
    (prep from/IN (pobj 1910/CD))
    (prep to/TO (pobj 1913/CD))
    (punct ./.))";

/// Stapledon was educated at Abbotsholme School and Balliol College, Oxford,
/// where he acquired a BA in Modern History.
pub const STAPLEDON_EDUCATED: &str = "
(educated/VBN
    (nsubjpass Stapledon/NNP)
    (auxpass was/VBD)
    (prep at/IN
        (pobj School/NNP
            (nn Abbotsholme/NNP)
            (cc and/CC)
            (conj College/NNP
                (nn Balliol/NNP)
                (punct ,/,)
                (appos Oxford/NNP)
                (punct ,/,)
                (rcmod acquired/VBD
                    (advmod where/WRB)
                    (nsubj he/PRP)
                    (dobj BA/NNP (det a/DT) (prep in/IN (pobj History/NNP (nn Modern/NNP))))))))
    (punct ./.))";

/// The first years of Stapledon's and Magaret's life were spent with their
/// parents at Port Tortilla.
pub const STAPLEDON_LIFE: &str = "
(spent/VBN
    (nsubjpass years/NNS
        (det The/DT)
        (amod first/JJ)
        (prep of/IN
            (pobj life/NN
                (poss Stapledon/NNP
                    (possessive 's/POS)
                    (cc and/CC)
                    (conj Magaret/NNP (possessive 's/POS))))))
    (auxpass were/VBD)
    (prep with/IN (pobj parents/NNS (poss their/PRP$)))
    (prep at/IN (pobj Tortilla/NNP (nn Port/NNP)))
    (punct ./.))";

/// Dmitry was born in Moscow.
pub const DMITRY_BORN: &str = "
(born/VBN
    (nsubjpass Dmitry/NNP)
    (auxpass was/VBD)
    (prep in/IN (pobj Moscow/NNP))
    (punct ./.))";

/// Dmitry started his career in the Russian Drama Theatre of Lithuania in Vilnius.
pub const DMITRY_CAREER: &str = "
(started/VBD
    (nsubj Dmitry/NNP)
    (dobj career/NN (poss his/PRP$))
    (prep in/IN
        (pobj Theatre/NNP
            (det the/DT)
            (amod Russian/JJ)
            (nn Drama/NNP)
            (prep of/IN (pobj Lithuania/NNP))
            (prep in/IN (pobj Vilnius/NNP))))
    (punct ./.))";

/// Then Dmitry directed opera and drama in many major Russian cities: Moscow,
/// Saint Petersburg, Novosibirsk, Omsk, Samara, Kazan and others.
pub const DMITRY_OPERA: &str = "
(directed/VBD
    (advmod Then/RB)
    (nsubj Dmitry/NNP)
    (dobj opera/NN (cc and/CC) (conj drama/NN))
    (prep in/IN
        (pobj cities/NNS
            (amod many/JJ)
            (amod major/JJ)
            (amod Russian/JJ)
            (punct :/:)
            (dep Moscow/NNP
                (punct ,/,)
                (appos Petersburg/NNP (nn Saint/NNP))
                (punct ,/,)
                (appos Novosibirsk/NNP)
                (punct ,/,)
                (appos Omsk/NNP)
                (punct ,/,)
                (appos Samara/NNP)
                (punct ,/,)
                (appos Kazan/NNP)
                (cc and/CC)
                (conj others/NNS))))
    (punct ./.))";

/// Dmitry worked before moving to Vilnius.
pub const DMITRY_MOVING: &str = "
(worked/VBD
    (nsubj Dmitry/NNP)
    (prep before/IN (pcomp moving/VBG (prep to/TO (pobj Vilnius/NNP))))
    (punct ./.))";

/// Sarah Palin is a friend of Trump
pub const SARAH_PALIN: &str = "
(friend/NN
    (nsubj Palin/NNP (nn Sarah/NNP))
    (cop is/VBZ)
    (det a/DT)
    (prep of/IN (pobj Trump/NNP)))";

/// Yoda and ObiWan were the mentors of Skywalker.
pub const YODA: &str = "
(mentors/NNS
    (nsubj Yoda/NNP (cc and/CC) (conj ObiWan/NNP))
    (cop were/VBD)
    (det the/DT)
    (prep of/IN (pobj Skywalker/NNP))
    (punct ./.))";

/// Contaldo was a good friend of Jose Calderon
pub const CONTALDO: &str = "
(friend/NN
    (nsubj Contaldo/NNP)
    (cop was/VBD)
    (det a/DT)
    (amod good/JJ)
    (prep of/IN (pobj Calderon/NNP (nn Jose/NNP))))";

/// Paul Annacone, as Federer's coach
pub const ANNACONE_FRAGMENT: &str = "
(Annacone/NNP
    (nn Paul/NNP)
    (punct ,/,)
    (prep as/IN (pobj coach/NN (poss Federer/NNP (possessive 's/POS)))))";

/// Lux, who died in Paris
pub const LUX: &str = "
(Lux/NNP
    (punct ,/,)
    (rcmod died/VBD (nsubj who/WP) (prep in/IN (pobj Paris/NNP))))";

/// Moscow in Russia in Europe
pub const NESTED_IN: &str = "
(pobj Moscow/NNP (prep in/IN (pobj Russia/NNP (prep in/IN (pobj Europe/NNP)))))";
