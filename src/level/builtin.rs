//! The builtin campaign levels.
//!
//! Cell legend: `#` solid, `P` player spawn, `F` flag, `C` checkpoint,
//! `E` ground enemy, `V` flying enemy, `O` coin, anything else empty.

/// Number of builtin levels.
pub const LEVEL_COUNT: u32 = 5;

const LEVEL_1: &str = "\
#                                      #
#                                      #
#                                      #
#                                      #
#               O                      #
#  P      O         O                F #
##                              ########
##      ###   O   ###   O   ############
########################################
########################################
";

const LEVEL_2: &str = "\
#                                      #
#                                      #
#               O                      #
#                                      #
#  P      O              O           F #
##           #E#              ##########
##      ###          ###   O   #########
########################################
########################################
";

const LEVEL_3: &str = "\
#                                                                                                  #
#                                                                                                  #
#                                                                                                  #
#                                                                                                  #
#                    O             O                          O                                    #
#  P      O      V          V               V         C               V                          F #
##           ######    ######       ######      ########      ######       ######       ###########
##                                                                                        #########
##    O   ###       ##       ##        ###      ##       ###       ##       ###      ###############
####################################################################################################
####################################################################################################
";

const LEVEL_4: &str = "\
#                                                                                                  #
#                                                                                                  #
#                                                                                                  #
#                O             O                          O                        O               #
#  P      O                                                                                      F #
##         #E#        #E#             V        C        V           #E#            V    ###########
##         ###        ###        ######      #####     ######       ###        ####################
####################################################################################################
####################################################################################################
";

const LEVEL_5: &str = "\
#                                                                                                                      #
#                                                                                                                      #
#                                                                                                                      #
#                         O             O                          O                          O                        #
#  P      O                                                                                                          F #
##                             V    #E#     C       V        #E#       V         #E#       V         ############
##         ##        ###       ##        ###   #####   ######     ###      ######     ###      ######     ############
##     #####    E    ###    E    ####     #####        ###        ####     #####     #####     ###  #########################
###########################################################################################################################
###########################################################################################################################
";

/// Level text for a builtin level id (1-based). Out-of-range ids fall back
/// to level 1.
pub fn level_text(level_id: u32) -> &'static str {
    match level_id {
        1 => LEVEL_1,
        2 => LEVEL_2,
        3 => LEVEL_3,
        4 => LEVEL_4,
        5 => LEVEL_5,
        _ => LEVEL_1,
    }
}
