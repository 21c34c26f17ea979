mod reconstruct_tests;
