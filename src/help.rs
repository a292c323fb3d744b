//! Static help texts printed by the `slim_predict` front end.
//!
//! Every line is newline-terminated and "blank" lines hold a single space, so
//! the output is the same byte for byte as the tool has always printed,
//! including the `-binarize` entry that runs straight on from the `-ifmt`
//! format list.

/// Full option reference, shown for `-help` and for unrecognized options.
pub const HELP: &str = concat!(
    " \n",
    " Usage:\n",
    "   slim_predict [options] model-file old-file [test-file]\n",
    " \n",
    " Parameters:\n",
    "   model-file\n",
    "       The file that stores the model that was generated by slim_learn.\n",
    " \n",
    "   old-file\n",
    "       The file that stores the historical information for each user.\n",
    " \n",
    "   test-file\n",
    "       The file that stores the hidden items for each user.\n",
    " \n",
    " Options:\n",
    "   -ifmt=string\n",
    "      Specifies the format of the input files. Available options are:\n",
    "        csr     -  CSR format [default].\n",
    "        csrnv   -  CSR format without ratings.\n",
    "        cluto   -  Format used by CLUTO.\n",
    "        ijv     -  One (row#, col#, val) per line.\n",
    "    -binarize\n",
    "      Specifies that the ratings should be binarized.\n",
    " \n",
    "   -outfile=string\n",
    "      Specifies the output file that will store the predictions.\n",
    "      If not specified, no output will be produced.\n",
    " \n",
    "   -nrcmds=int\n",
    "      Specifies the number of items to recommend for each user.\n",
    "      The default value is 10.\n",
    " \n",
    "   -dbglvl=int\n",
    "      Specifies the debug level. The default value is 0.\n",
    " \n",
    "   -help\n",
    "      Prints this message.\n",
    " \n",
);

/// One-line usage reminder, shown when the number of files is out of range.
pub const SHORT_HELP: &str = concat!(
    " \n",
    " Usage: slim_predict [options] model-file old-file [test-file]\n",
    "   use 'slim_predict -help' for a summary of the options.\n",
);
