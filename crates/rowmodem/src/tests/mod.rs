mod transduce_good;
