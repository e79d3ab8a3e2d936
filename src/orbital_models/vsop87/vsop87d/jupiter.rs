//! VSOP87D series for Jupiter: heliocentric L, B, R on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const L0: &[Term] = &[
    [0.59954691495, 0.0, 0.0],
    [0.09695898711, 5.06191793105, 529.6909650946],
    [0.00573610145, 1.44406205976, 7.1135470008],
    [0.0030638918, 5.41734729976, 1059.3819301892],
    [0.0009717828, 4.14264708819, 632.7837393132],
    [0.00072903096, 3.64042909255, 522.5774180938],
    [0.00064263986, 3.41145185203, 103.0927742186],
    [0.00039806051, 2.29376744855, 419.4846438752],
    [0.0003885778, 1.2723172486, 316.3918696566],
    [0.00027964622, 1.78454589485, 536.8045120954],
    [0.00013589738, 5.7748103159, 1589.0728952838],
    [0.00008246362, 3.58227961655, 206.1855484372],
    [0.00008768686, 3.63000324417, 949.1756089698],
    [0.00007368057, 5.08101125612, 735.8765135318],
    [0.00006263171, 0.02497643742, 213.299095438],
    [0.0000611405, 4.51319531666, 1162.4747044078],
    [0.00004905419, 1.32084631684, 110.2063212194],
    [0.00005305283, 1.30671236848, 14.2270940016],
    [0.00005305457, 4.18625053495, 1052.2683831884],
    [0.00004647249, 4.69958109497, 3.9321532631],
    [0.00003045009, 4.31675960318, 426.598190876],
    [0.00002610001, 1.5666759485, 846.0828347512],
    [0.00002028191, 1.06376547379, 3.1813937377],
    [0.00001764768, 2.14148077766, 1066.49547719],
    [0.00001722983, 3.88036008872, 1265.5674786264],
    [0.00001920959, 0.97168928755, 639.897286314],
    [0.00001633217, 3.58201089758, 515.463871093],
    [0.00001431997, 4.29683690269, 625.6701923124],
    [0.00000973278, 4.09764957065, 95.9792272178],
    [0.00000884439, 2.43701426123, 412.3710968744],
    [0.00000732875, 6.08534113239, 838.9692877504],
    [0.00000731072, 3.80591233956, 1581.959348283],
    [0.00000691928, 6.13368222939, 2118.7638603784],
    [0.0000070919, 1.29272573658, 742.9900605326],
    [0.00000614464, 4.10853496756, 1478.8665740644],
    [0.00000495224, 3.75567461379, 323.5054166574],
    [0.00000581902, 4.53967717552, 309.2783226558],
    [0.00000375657, 4.70299124833, 1368.660252845],
    [0.00000389864, 4.89716105852, 1692.1656695024],
    [0.00000341006, 5.71452525783, 533.6231183577],
    [0.00000330458, 4.74049819491, 0.0481841098],
    [0.00000440854, 2.95818460943, 454.9093665273],
    [0.00000417266, 1.03554430161, 2.4476805548],
    [0.0000024417, 5.220208789, 728.762966531],
    [0.0000026154, 1.87652461032, 0.9632078465],
    [0.00000256568, 3.72410724159, 199.0720014364],
    [0.00000261009, 0.82047246448, 380.12776796],
    [0.00000220382, 1.65115015995, 543.9180590962],
    [0.00000201996, 1.80684574186, 1375.7737998458],
    [0.00000207327, 1.85461666594, 525.7588118315],
    [0.00000197046, 5.29252149016, 1155.361157407],
    [0.00000235141, 1.22693908124, 909.8187330546],
    [0.00000174809, 5.90973505276, 956.2891559706],
    [0.00000149368, 4.37745104275, 1685.0521225016],
    [0.00000175184, 3.22634903433, 1898.3512179396],
    [0.00000175191, 3.72966554761, 942.062061969],
    [0.00000157909, 4.36483921766, 1795.258443721],
    [0.00000137871, 1.31797920785, 1169.5882514086],
    [0.00000117495, 2.5002214089, 1596.1864422846],
    [0.00000150502, 3.90625022622, 74.7815985673],
    [0.00000116757, 3.38920921041, 0.5212648618],
    [0.00000105895, 4.55439798236, 526.5095713569],
    [0.00000130531, 4.16867945489, 1045.1548361876],
    [0.00000141445, 3.13568357861, 491.5579294568],
    [0.00000099511, 1.42117395747, 532.8723588323],
    [0.00000096137, 1.18156870005, 117.3198682202],
    [0.00000091758, 0.85756633461, 1272.6810256272],
    [0.00000087695, 1.21738140813, 453.424893819],
    [0.00000068507, 2.35242959478, 2.9207613068],
    [0.00000066098, 5.34386149468, 1471.7530270636],
    [0.00000077401, 4.42676337124, 39.3568759152],
    [0.00000072006, 4.23834923691, 2111.6503133776],
    [0.00000063406, 4.97665525033, 0.7507595254],
    [0.00000059427, 4.11130498612, 2001.4439921582],
    [0.00000062481, 0.51211384012, 220.4126424388],
    [0.00000066532, 2.98864358135, 2214.7430875962],
    [0.00000060194, 4.12628179571, 4.192785694],
    [0.00000056012, 1.15493222602, 21.3406410024],
    [0.00000052854, 0.91207215543, 10.2949407385],
    [0.00000070297, 5.14180555282, 835.0371344873],
    [0.00000051916, 4.1004818002, 1258.4539316256],
    [0.00000046442, 4.66531163524, 5.6290742925],
    [0.0000005819, 5.86646380344, 5753.3848848968],
    [0.00000040103, 4.68801114087, 0.1600586944],
    [0.00000046654, 4.79394835282, 305.3461693927],
    [0.00000039298, 4.25448423697, 853.196381752],
    [0.00000046042, 5.1098351515, 4.665866446],
    [0.00000054459, 1.57072704127, 983.1158589136],
    [0.0000003892, 6.0759290558, 518.6452648307],
    [0.0000003845, 2.43836870888, 433.7117378768],
    [0.000000468, 3.54640538283, 5.4166259714],
    [0.0000004183, 4.67982493646, 302.164775655],
    [0.0000003592, 2.45088036239, 430.5303441391],
    [0.00000037888, 0.21127448431, 2648.454825473],
    [0.0000003919, 1.71835571629, 11.0457002639],
    [0.00000037567, 6.19481310233, 831.8557407496],
    [0.00000035828, 4.61459907698, 2008.557539159],
    [0.00000043402, 0.14992289081, 528.2064923863],
    [0.00000031598, 5.14073450755, 1788.1448967202],
    [0.00000029849, 5.34441117167, 2221.856634597],
    [0.00000032811, 5.28907118836, 88.865680217],
    [0.00000027686, 1.85227036207, 0.2124483211],
    [0.0000002582, 3.85920882494, 2317.8358618148],
    [0.00000024705, 2.63495214991, 114.1384744825],
    [0.00000033844, 1.00563073268, 9683.5945811164],
    [0.00000024266, 3.82355417268, 1574.8458012822],
    [0.00000027111, 2.80845435102, 18.1592472647],
    [0.00000026837, 1.77586123775, 532.1386456494],
    [0.00000026064, 2.74361318804, 2531.1349572528],
    [0.00000030765, 0.42330537728, 1.4844727083],
    [0.00000030476, 3.66677894407, 508.3503240922],
    [0.00000023282, 3.24372142416, 984.6003316219],
    [0.00000019445, 0.52370214471, 14.977853527],
    [0.00000019332, 4.86314494382, 1361.5467058442],
    [0.0000002291, 3.84914895064, 2428.0421830342],
    [0.00000021617, 6.01696940024, 1063.3140834523],
    [0.00000020155, 5.59582008789, 527.2432845398],
    [0.00000023732, 2.52766031921, 494.2662424425],
    [0.00000020189, 1.01560227681, 628.8515860501],
    [0.00000015994, 5.09003530653, 529.7391492044],
    [0.00000016134, 5.27095037302, 142.4496501338],
    [0.00000020697, 4.03443281612, 355.7487455718],
    [0.00000021479, 1.28668134295, 35.4247226521],
    [0.00000014964, 4.8603968439, 2104.5367663768],
    [0.00000017242, 1.59187913206, 1439.5096981492],
    [0.00000015994, 1.89222417794, 529.6427809848],
    [0.00000017958, 4.30178016003, 6.1503391543],
    [0.00000013279, 2.18943981644, 1055.4497769261],
    [0.00000014148, 2.71597731671, 0.2606324309],
    [0.00000014689, 0.87944553412, 99.1606209555],
    [0.00000014202, 2.41335693735, 530.6541729411],
    [0.0000001532, 6.07703092728, 149.5631971346],
    [0.00000015832, 4.11682440678, 636.7158925763],
    [0.00000012398, 2.61042299578, 405.2575498736],
    [0.00000016199, 2.77035044582, 760.25553592],
    [0.00000013665, 3.5603967831, 217.2312487011],
    [0.00000015261, 2.81824770887, 621.7380390493],
    [0.00000014681, 6.26423732742, 569.0478410098],
    [0.00000012529, 1.39077179081, 7.065362891],
    [0.00000011677, 3.60447374272, 2634.2277314714],
    [0.00000011603, 4.60461756191, 7.1617311106],
    [0.00000012152, 0.24540531919, 1485.9801210652],
    [0.00000011347, 2.00818458261, 1073.6090241908],
    [0.00000011242, 2.4800094787, 423.4167971383],
    [0.00000010942, 5.03602448252, 458.8415197904],
    [0.00000011117, 4.04973271023, 519.3960243561],
    [0.00000012256, 4.30153222783, 604.4725636619],
    [0.00000013149, 2.72189077702, 1364.7280995819],
    [0.00000010604, 3.11518747072, 1.2720243872],
    [0.00000009874, 1.70200068743, 1699.2792165032],
    [0.00000010851, 5.08554552028, 2324.9494088156],
    [0.00000010692, 2.51401681528, 2847.5268269094],
    [0.0000001264, 4.75572797691, 528.7277572481],
    [0.00000010084, 4.05599810206, 38.1330356378],
    [0.00000011536, 2.35034215745, 643.8294395771],
    [0.00000010247, 3.63479911496, 2744.4340526908],
    [0.00000010105, 3.65845333837, 107.0249274817],
    [0.00000010121, 1.31482648275, 1905.4647649404],
    [0.00000009341, 5.92176693887, 1148.2476104062],
    [0.00000008796, 2.77421822809, 6.592282139],
    [0.0000000842, 4.52537756809, 1677.9385755008],
    [0.00000010128, 2.09034472544, 511.5317178299],
    [0.00000008272, 2.98682673354, 540.7366653585],
    [0.00000009753, 1.22438911827, 32.2433289144],
    [0.0000001063, 2.07777800288, 92.0470739547],
    [0.0000000785, 0.98996894618, 408.4389436113],
    [0.00000008811, 3.46911754939, 1021.2488945514],
    [0.00000007946, 2.8668292607, 2125.8774073792],
    [0.00000008575, 5.29590411702, 415.5524906121],
    [0.00000007841, 6.08025056721, 70.8494453042],
    [0.00000007706, 1.69832954219, 8.0767548473],
    [0.00000007265, 4.65503563919, 629.6023455755],
    [0.00000007164, 4.93400217968, 1056.2005364515],
    [0.00000007247, 4.6160767756, 2420.9286360334],
    [0.00000007753, 2.12871653382, 33.9402499438],
    [0.00000006645, 0.45647460873, 635.9651330509],
    [0.00000009377, 4.03158388202, 2810.9214616052],
    [0.00000008263, 1.23558676139, 1802.3719907218],
    [0.00000006341, 0.0727800158, 202.2533951741],
    [0.00000006383, 3.54310669809, 1891.2376709388],
    [0.00000007902, 2.32510002614, 230.5645708254],
    [0.00000006214, 4.54560345237, 2.7083129857],
    [0.00000007347, 1.24457237337, 24.3790223882],
    [0.00000007451, 3.02719199239, 330.6189636582],
    [0.0000000622, 1.77687561489, 1062.5633239269],
    [0.00000005674, 5.14132196367, 746.9222137957],
    [0.00000005855, 5.42130172896, 28.3111756513],
    [0.00000005629, 3.24348217277, 529.1697002328],
    [0.00000007652, 0.52813391052, 672.1406152284],
    [0.00000005456, 3.34716871364, 2950.619601128],
    [0.00000007127, 1.43497795005, 6.2197751235],
    [0.00000005388, 4.9017509558, 69.1525242748],
    [0.00000005618, 4.97903783721, 2641.3412784722],
    [0.00000005844, 2.95364118152, 490.3340891794],
    [0.00000004943, 5.37597740579, 721.6494195302],
    [0.00000005062, 4.84282906467, 31.019488637],
    [0.00000005163, 5.07410777073, 67.6680515665],
    [0.00000004739, 6.10248862834, 106.2741679563],
    [0.00000004879, 0.07095292379, 78.7137518304],
    [0.00000004854, 5.63875661096, 1.6969210294],
    [0.00000005629, 3.73871604865, 530.2122299564],
    [0.00000004471, 4.49152882547, 505.3119427064],
    [0.00000004313, 4.79369370451, 535.107591066],
    [0.0000000428, 0.5478382371, 1.4362885985],
    [0.00000004453, 0.50551854591, 524.0618908021],
    [0.00000004936, 4.82992988255, 422.6660376129],
    [0.00000004701, 3.41634869046, 3060.8259223474],
    [0.00000004261, 2.67044686458, 561.934294009],
    [0.00000004156, 4.00660658688, 99.9113804809],
    [0.00000004561, 2.29650164054, 3163.918696566],
    [0.00000004414, 5.67224020329, 1464.6394800628],
    [0.00000005345, 0.3151385183, 1289.9465010146],
    [0.00000005269, 3.89116469022, 191.9584544356],
    [0.00000003855, 4.28942301453, 1994.3304451574],
    [0.0000000421, 5.32763589447, 2538.2485042536],
    [0.00000003949, 4.56507101172, 1382.8873468466],
    [0.00000003885, 1.5677878681, 647.0108333148],
    [0.00000004227, 5.5169759903, 5223.6939198022],
    [0.00000004129, 2.81119457666, 416.3032501375],
    [0.00000003663, 4.35187510477, 2737.32050569],
    [0.00000003566, 5.48243943375, 750.1036075334],
    [0.0000000433, 0.8494175664, 531.1754378029],
    [0.00000004093, 0.19980340452, 525.0250986486],
    [0.00000004022, 1.92293311337, 1512.8068240082],
    [0.000000034, 6.00302355875, 1.2238402774],
    [0.00000003496, 0.31252921473, 597.3590166611],
    [0.00000003299, 4.27596694481, 526.7702037878],
    [0.00000003226, 2.90455264496, 963.4027029714],
    [0.0000000315, 3.81061764181, 280.9671470045],
    [0.00000004129, 4.74946631331, 0.8937718773],
    [0.0000000384, 1.91064405186, 378.6432952517],
    [0.00000003057, 1.65589659685, 528.9402055692],
    [0.00000003011, 1.59276337369, 224.3447957019],
    [0.00000003196, 5.86588452873, 4.1446015842],
    [0.00000003628, 0.07930225897, 558.0021407459],
    [0.00000002932, 0.41424445089, 7.8643065262],
    [0.00000003316, 2.70211697795, 532.6117264014],
    [0.00000002925, 4.47580363425, 533.8837507886],
    [0.0000000369, 0.39897023849, 685.4739373527],
    [0.00000003223, 2.45833032883, 960.2213092337],
    [0.00000003059, 5.32616140812, 530.44172462],
    [0.00000003383, 4.42170370028, 312.4597163935],
    [0.0000000332, 2.71417812514, 495.7507151508],
    [0.00000002697, 5.23146633437, 739.8086667949],
    [0.0000000359, 2.30999595873, 908.3342603463],
    [0.00000003677, 5.07337955976, 73.297125859],
    [0.00000002618, 3.09118499149, 3267.0114707846],
    [0.00000002796, 2.98942316119, 483.2205421786],
    [0.00000003398, 3.29598270278, 911.3032057629],
    [0.00000003352, 1.44391979336, 593.426863398],
    [0.00000002563, 3.35080110279, 2207.6295405954],
    [0.00000002553, 0.36892288645, 1048.3362299253],
    [0.0000000262, 3.8276987434, 520.129737539],
    [0.00000003356, 1.08315053878, 46.470422916],
    [0.00000003035, 5.52230028113, 618.5566453116],
    [0.00000003397, 3.83084746522, 210.1177017003],
    [0.00000002497, 0.47917884538, 945.2434557067],
    [0.00000002341, 5.87941292649, 2751.5475996916],
    [0.00000002656, 0.49713061045, 1057.8974574809],
    [0.00000002581, 0.03759881914, 1.6445314027],
    [0.000000029, 2.50019054587, 525.4981794006],
    [0.00000003153, 2.30900986177, 457.617679513],
    [0.00000002201, 3.94367109739, 31.492569389],
    [0.00000002381, 6.19252134885, 327.4375699205],
    [0.00000002458, 0.65614291954, 9153.9036160218],
    [0.00000002111, 5.61905648764, 16.4623262353],
    [0.0000000213, 3.75880734109, 724.8308132679],
    [0.00000002406, 2.29315649755, 195.1398481733],
    [0.00000002166, 5.43262641046, 534.3568315406],
    [0.00000002057, 1.49875151278, 551.031606097],
    [0.00000002676, 5.06374981112, 456.3938392356],
    [0.00000002078, 5.28920097886, 76.2660712756],
    [0.00000002261, 5.38117230692, 1781.0313497194],
    [0.00000002356, 0.67392574097, 227.5261894396],
    [0.0000000224, 3.18006978517, 3377.217792004],
    [0.00000002183, 3.0838425095, 524.2743391232],
    [0.00000002119, 2.70107659927, 387.2413149608],
    [0.00000002056, 4.82779196994, 2957.7331481288],
    [0.00000002116, 6.20263841494, 209.3669421749],
    [0.00000002712, 3.18157754631, 1474.6737883704],
    [0.00000002127, 1.24424012514, 539.9859058331],
    [0.00000002424, 3.57595925853, 953.1077622329],
    [0.00000001947, 1.94468082546, 529.5309064002],
    [0.00000001896, 4.014062428, 2310.722314814],
    [0.00000001935, 4.1005149395, 3053.7123753466],
    [0.00000002056, 6.2707414855, 245.5424243524],
    [0.00000002108, 3.22886474225, 252.6559713532],
    [0.00000002596, 2.77467278614, 177.8743727859],
    [0.00000001919, 3.14834694111, 381.6122406683],
    [0.00000002217, 1.92368906925, 535.9107402181],
    [0.00000001947, 5.03751780002, 529.851023789],
    [0.00000002025, 4.82814272957, 17.2654753874],
    [0.00000001945, 2.10611582568, 3480.3105662226],
    [0.00000001899, 0.05104263891, 560.7104537316],
    [0.00000002221, 0.5836509063, 3178.1457905676],
    [0.00000002271, 1.67360565619, 731.9443602687],
    [0.00000001706, 5.40277333462, 20.4468691251],
    [0.00000002295, 4.20863103004, 1038.0412891868],
    [0.00000002218, 3.65982280555, 282.4516197128],
    [0.00000002181, 4.87369503022, 535.3200393871],
    [0.00000001745, 1.34021867874, 25.1297819136],
    [0.00000001601, 3.9273001584, 17.5261078183],
    [0.00000001651, 0.63598292839, 17.4084877393],
    [0.00000001826, 0.31592311031, 124.433415221],
    [0.00000002041, 0.15617294873, 598.8434893694],
    [0.00000001494, 3.8141802513, 319.5732633943],
    [0.00000001551, 5.25201528605, 437.6438911399],
    [0.00000001852, 2.36130812462, 37.8724032069],
    [0.00000001466, 1.72926380881, 59.8037450403],
    [0.00000001417, 5.82273267086, 81.7521332162],
    [0.0000000143, 1.1752880626, 440.8252848776],
    [0.00000001906, 4.06896022692, 1819.6374661092],
    [0.00000001397, 0.26383366743, 50.4025761791],
    [0.00000001756, 2.32977483716, 938.1299087059],
    [0.00000001487, 2.2486674654, 10.0343083076],
    [0.00000001368, 3.56691602771, 1514.2912967165],
    [0.000000014, 4.84502200703, 295.0512286542],
    [0.00000001344, 2.20177702122, 529.9034134157],
    [0.00000001464, 1.42648716568, 1158.5425511447],
    [0.00000001341, 1.15693423225, 2435.155730035],
    [0.00000001786, 5.44716330146, 2854.6403739102],
    [0.00000001677, 6.22875777048, 833.552661779],
    [0.00000001471, 4.80574535807, 696.5196376166],
    [0.00000001436, 1.4581095733, 537.7677199419],
    [0.00000001657, 0.02890651793, 138.5174968707],
    [0.000000013, 3.14074420421, 547.8502123593],
    [0.00000001343, 6.14827138025, 988.532484885],
    [0.00000001344, 4.78042160426, 529.4785167735],
    [0.00000001234, 2.83294330979, 3583.4033404412],
    [0.00000001651, 2.12056447005, 1061.829610744],
    [0.00000001479, 0.24646493075, 1593.0050485469],
    [0.00000001413, 3.07444632745, 6283.0758499914],
    [0.00000001246, 5.94882321661, 1056.9342496344],
    [0.00000001225, 1.95642397635, 1969.2006632438],
    [0.00000001388, 2.87749576073, 1023.9572075371],
    [0.00000001263, 3.46181945031, 40.8413486235],
    [0.00000001325, 4.15429781246, 916.9322800554],
    [0.00000001477, 5.26691818477, 810.6581120991],
    [0.00000001165, 4.65528125418, 944.9828232758],
    [0.00000001137, 2.48561382158, 2.0057375701],
    [0.00000001118, 3.80747957482, 7.0016724162],
    [0.00000001138, 5.11611532241, 885.4397106664],
    [0.00000001131, 1.54599459004, 775.233389447],
    [0.00000001477, 4.69742954455, 630.3360587584],
    [0.00000001252, 1.34316620527, 739.0579072695],
    [0.00000001273, 5.19070939905, 2097.423219376],
    [0.00000001446, 5.54999644374, 43.2890291783],
    [0.00000001344, 4.75897665313, 1166.4068576709],
    [0.00000001101, 4.56997613488, 3274.1250177854],
    [0.00000001376, 3.60998729004, 415.2918581812],
    [0.00000001437, 6.22410093972, 155.7829722581],
    [0.00000001167, 4.09497264272, 203.0041546995],
    [0.00000001237, 4.41132627005, 292.0128472684],
    [0.00000001077, 2.57045229823, 25.2727942655],
    [0.00000001341, 0.49262296655, 635.231419868],
    [0.00000001209, 3.36289125536, 521.6142102473],
    [0.0000000103, 1.81822316284, 465.9550667912],
    [0.00000001002, 3.21720955284, 2524.021410252],
    [0.00000001338, 1.26054917773, 902.7051860538],
    [0.00000001037, 3.87858871885, 3370.1042450032],
    [0.00000001224, 0.09219976028, 824.7421937488],
    [0.00000001255, 3.04675952762, 447.7958195265],
    [0.00000000991, 4.16587903812, 632.831923423],
    [0.00000000975, 3.80216680539, 2627.1141844706],
    [0.00000001061, 5.60184374277, 732.6951197941],
    [0.00000001049, 2.94931080683, 3693.6096616606],
    [0.00000000984, 0.98260254313, 632.7355552034],
    [0.0000000105, 2.20935815967, 7.2254215854],
    [0.00000000996, 5.41921062583, 1059.430114299],
    [0.00000000961, 0.87315283361, 544.6688186216],
    [0.00000001175, 3.09093466406, 1894.4190646765],
    [0.00000001049, 5.81616384906, 26.826702943],
    [0.00000001161, 0.01274801567, 850.0149880143],
    [0.00000001109, 3.63294273717, 306.830642101],
    [0.00000001077, 0.95716576092, 608.404716925],
    [0.00000001288, 4.23019288942, 1215.1649024473],
    [0.0000000106, 3.85856787901, 631.8205314667],
    [0.00000001251, 6.15889818604, 462.0229135281],
    [0.00000001165, 3.50653563773, 8.5980197091],
    [0.00000000933, 4.62559759882, 1049.0869894507],
    [0.00000001035, 1.30805283339, 633.7469471597],
    [0.00000001238, 2.21195391602, 25558.2121764796],
    [0.0000000124, 2.27960685992, 6.9010986797],
    [0.00000000942, 4.14526324371, 945.9942152321],
    [0.00000000927, 6.10893117637, 514.7131115676],
    [0.00000000914, 6.17656044376, 952.3570027075],
    [0.00000000893, 4.27448748055, 0.6331394464],
    [0.00000001045, 1.64682770236, 565.1156877467],
    [0.00000000903, 1.9425015664, 3796.7024358792],
    [0.00000001162, 5.51229668479, 2.9689454166],
    [0.00000000901, 3.03568112112, 460.5384408198],
    [0.00000000903, 2.24012822393, 523.5406259403],
    [0.0000000106, 5.28027224466, 3171.0322435668],
    [0.00000001064, 0.99330150801, 320.3240229197],
    [0.0000000097, 4.56607888439, 429.0458714308],
    [0.00000001071, 4.33203090957, 610.6923387854],
    [0.00000000865, 0.2183142923, 1098.7388061044],
    [0.00000000865, 2.82123742108, 1060.3451380357],
    [0.00000000882, 4.80076824948, 384.0599212231],
    [0.00000000959, 5.45468005818, 451.9404211107],
    [0.00000001042, 5.7927032515, 303.8616966844],
    [0.00000000784, 1.85150700827, 313.2104759189],
    [0.00000001083, 1.40526460812, 72.0732855816],
    [0.00000000782, 3.03559242565, 5.8415226136],
    [0.00000000854, 1.22236205478, 611.4430983108],
    [0.00000000996, 2.22139794743, 1059.3337460794],
    [0.00000000719, 4.92550252164, 421.93232443],
    [0.00000000953, 3.98347050083, 836.5216071956],
    [0.00000000822, 4.49679856387, 10213.285546211],
    [0.00000000707, 2.16473400319, 2228.9701815978],
    [0.00000000715, 4.62515255534, 385.5443939314],
    [0.00000000737, 4.63776694324, 1134.1635287565],
    [0.0000000073, 1.87179326186, 153.4953503977],
    [0.00000000709, 2.9313211591, 417.0369633204],
    [0.00000000926, 1.77006317007, 2332.0629558164],
    [0.00000000864, 3.0324627597, 1041.2226829245],
    [0.00000000708, 6.01601101389, 395.105621487],
    [0.00000000935, 6.01864676296, 173.9422195228],
    [0.00000000695, 1.39408383356, 432.0148168474],
    [0.00000000687, 3.06548397586, 529.9515975255],
    [0.00000000677, 3.5835752721, 244.318584075],
    [0.0000000085, 5.46114025921, 41.0537969446],
    [0.00000000817, 4.65315342412, 535.8413042489],
    [0.00000000652, 0.44173759183, 1201.831580323],
    [0.00000000711, 0.9628328931, 373.0142209592],
    [0.00000000665, 1.03244633471, 623.2225117576],
    [0.00000000643, 5.05335060049, 522.6256022036],
    [0.00000000639, 4.22718483639, 25.8634950965],
    [0.00000000718, 5.0757690071, 1058.4187223427],
    [0.00000000664, 2.43728454444, 1585.1407420207],
    [0.00000000833, 1.49468440213, 563.6312150384],
    [0.0000000076, 4.34849823663, 100.6450936638],
    [0.00000000633, 4.3179671864, 3590.516887442],
    [0.00000000629, 6.23431126402, 679.2541622292],
    [0.00000000617, 2.68075016456, 3899.7952100978],
    [0.00000000646, 2.88581188015, 13.4933808187],
    [0.00000000768, 3.1849807612, 1151.4290041439],
    [0.00000000731, 5.86653168561, 501.3797894433],
    [0.00000000652, 0.8286577178, 2015.6710861598],
    [0.00000000796, 5.36663489938, 420.9691165835],
    [0.00000000647, 4.74965662438, 567.8240007324],
    [0.00000000845, 1.69406147722, 1744.8558675419],
    [0.00000000802, 5.79824707751, 981.6313862053],
    [0.00000000764, 5.05232933368, 827.9235874865],
    [0.00000000604, 5.11265182908, 1159.2933106701],
    [0.00000000682, 3.68248136835, 2281.2304965106],
    [0.0000000074, 0.74512356954, 1261.6353253633],
    [0.00000000666, 2.06624389616, 27.0873353739],
    [0.00000000652, 4.92932795958, 2413.8150890326],
    [0.00000000559, 0.17558868481, 63.7358983034],
    [0.00000000577, 3.82752312276, 1550.939859646],
    [0.00000000727, 1.05835550856, 490.0734567485],
    [0.00000000574, 3.61492119092, 3686.4961146598],
    [0.00000000732, 5.93179840659, 42.5382696529],
    [0.00000000606, 2.714118843, 1173.5204046717],
    [0.00000000633, 4.21720828607, 166.828672522],
    [0.00000000687, 3.91671464962, 529.4303326637],
    [0.0000000057, 2.73551750122, 4010.0015313172],
    [0.00000000552, 2.36967119362, 1603.2999892854],
    [0.000000006, 1.82659364395, 522.529233984],
    [0.00000000558, 5.09099246601, 1354.4331588434],
    [0.00000000519, 6.11952999304, 366.7944458357],
    [0.00000000719, 0.85722557905, 362.8622925726],
    [0.00000000518, 2.03954064144, 418.5214360287],
    [0.00000000515, 3.51750445111, 528.4189407074],
    [0.00000000515, 3.47930063838, 103.1409583284],
    [0.0000000055, 5.7767683773, 420.4478517217],
    [0.00000000702, 3.67952126446, 1279.794572628],
    [0.0000000055, 0.61451088395, 104.0559820651],
    [0.00000000495, 2.41738205536, 179.3588454942],
    [0.00000000513, 0.29823688044, 103.0445901088],
    [0.00000000537, 5.47946238724, 771.3012361839],
    [0.00000000507, 3.08777345288, 1357.6145525811],
    [0.00000000495, 4.9536265916, 536.8526962052],
    [0.00000000681, 4.56294416261, 112.6540017742],
    [0.000000005, 3.15631977489, 1070.4276304531],
    [0.00000000484, 0.79038835602, 28.4541880032],
    [0.00000000529, 5.46978501034, 419.4364597654],
    [0.00000000597, 4.98058295172, 1251.3403846248],
    [0.00000000492, 3.96066546484, 1269.4996318895],
    [0.00000000482, 3.6016766249, 2943.5060541272],
    [0.0000000063, 6.16496640092, 105.5404547734],
    [0.0000000048, 0.86786400621, 35.212274331],
    [0.00000000516, 5.97528782923, 3067.9394693482],
    [0.00000000586, 5.48467997697, 56.6223513026],
    [0.00000000502, 1.43671788959, 469.8872200543],
    [0.00000000473, 2.28007170041, 2042.4977891028],
    [0.00000000565, 1.90952569252, 107.2855599126],
    [0.00000000452, 3.13938145287, 934.9485149682],
    [0.00000000605, 1.65413715574, 761.7400086283],
    [0.00000000443, 5.46282223686, 135.336103133],
    [0.0000000058, 2.06327501551, 493.0424021651],
    [0.0000000054, 1.7377799597, 536.7563279856],
    [0.00000000432, 0.27167052107, 93.531546663],
    [0.00000000515, 3.46469417437, 530.9629894818],
    [0.0000000044, 5.28884782489, 497.4476361802],
    [0.00000000487, 5.78767525063, 12036.4607348882],
    [0.00000000452, 2.57855172248, 1254.5217783625],
    [0.00000000427, 3.21032629463, 2840.4132799086],
    [0.00000000414, 1.54298025443, 115.6229471908],
    [0.00000000424, 0.12699448931, 1268.7488723641],
    [0.00000000411, 3.12424023238, 536.2832472336],
    [0.00000000452, 1.00194596383, 113.3877149571],
    [0.00000000419, 0.81834479225, 1165.6560981455],
    [0.0000000049, 4.72785081986, 277.0349937414],
    [0.00000000434, 0.36146539146, 1304.9243545416],
    [0.00000000401, 5.70326543719, 1127.0499817557],
    [0.00000000461, 3.2646289482, 102.1295663721],
    [0.00000000533, 2.54951615753, 141.2258098564],
    [0.00000000413, 4.38801694479, 6151.533888305],
    [0.00000000415, 1.68861617902, 391.1734682239],
    [0.00000000385, 1.69092319074, 4113.0943055358],
    [0.0000000045, 5.49339192735, 602.9880909536],
    [0.00000000499, 3.80738617353, 81.0013736908],
    [0.00000000454, 0.10952919733, 600.5404103988],
    [0.00000000377, 6.25375060718, 913.7508863177],
    [0.00000000453, 3.86104865567, 758.7710632117],
    [0.00000000401, 4.44475618337, 990.2294059144],
    [0.00000000407, 5.13442416563, 3487.4241132234],
    [0.00000000435, 3.7610335849, 523.0986829556],
    [0.00000000425, 3.22287851959, 2655.5683724738],
    [0.00000000365, 5.16456645463, 4694.0029547076],
    [0.00000000454, 1.6332519795, 976.0023119128],
    [0.00000000406, 2.72102389267, 1438.0252254409],
    [0.00000000349, 3.59598366422, 1058.8606653274],
    [0.00000000354, 0.6213633142, 498.6714764576],
    [0.00000000383, 5.09229089574, 539.2521926502],
    [0.0000000038, 3.92653231573, 561.1835344836],
    [0.00000000339, 4.12175871949, 3906.9087570986],
    [0.00000000458, 3.42556794767, 121.2520214833],
    [0.00000000427, 3.6128526491, 860.3099287528],
    [0.00000000424, 4.72757252331, 1366.2125722902],
    [0.00000000328, 4.55286002816, 1696.0978227655],
    [0.00000000324, 4.2368500521, 642.3449668688],
    [0.00000000395, 3.26282558955, 484.444382456],
    [0.0000000033, 6.05223507989, 215.7467759928],
    [0.00000000318, 2.0207280007, 2964.8466951296],
    [0.00000000417, 0.20173093597, 842.9014410135],
    [0.00000000408, 0.45800247268, 1578.0271950199],
    [0.00000000342, 6.15347077985, 1371.8416465827],
    [0.0000000031, 1.97259286255, 754.0357607965],
    [0.0000000034, 2.77813018312, 3.523118349],
    [0.00000000333, 2.91352254678, 576.1613880106],
    [0.00000000324, 0.32544817254, 586.3133163972],
    [0.00000000302, 2.08708848849, 526.9826521089],
    [0.00000000363, 4.7056711323, 2730.2069586892],
    [0.000000003, 0.94464473068, 1432.3961511484],
    [0.00000000352, 5.75013621801, 806.725958836],
    [0.00000000296, 3.97807312133, 2043.9822618111],
    [0.00000000295, 2.35257797599, 4216.1870797544],
    [0.00000000309, 2.49768755925, 4326.3934009738],
    [0.00000000306, 3.35876843257, 2424.1100297711],
    [0.000000003, 4.94288858368, 1379.7059531089],
    [0.00000000336, 4.49193455535, 1585.8915015461],
    [0.00000000402, 2.04684001796, 842.1506814881],
    [0.00000000312, 4.59043534747, 188.9200730498],
    [0.00000000346, 5.19792097706, 523.4711899711],
    [0.0000000038, 1.67961600066, 36.6485629295],
    [0.00000000338, 1.32014513725, 148.0787244263],
    [0.00000000391, 4.82224015188, 1012.9115072732],
    [0.00000000285, 3.43655052437, 1053.9653042178],
    [0.00000000332, 2.02575636311, 1091.6252591036],
    [0.00000000282, 5.7886532189, 1064.0477966352],
    [0.00000000282, 0.39153852422, 207.6700211455],
    [0.0000000028, 3.80196391678, 298.2326223919],
    [0.00000000387, 6.2681930999, 1141.1340634054],
    [0.00000000349, 4.09121908199, 1059.903195051],
    [0.0000000032, 0.39871942, 2122.6960136415],
    [0.00000000327, 4.76503823073, 134.5853436076],
    [0.00000000283, 3.90409016441, 127.4717966068],
    [0.00000000301, 4.30291951219, 299.1263942692],
    [0.00000000322, 2.4825105268, 1065.6017053127],
    [0.00000000297, 2.40814103509, 1591.5205758386],
    [0.00000000286, 5.85849626574, 172.2452984934],
    [0.00000000285, 4.55845472479, 1446.62324515],
    [0.0000000027, 4.08342186112, 1578.7779545453],
    [0.00000000362, 1.06148806683, 181.806526049],
    [0.00000000335, 4.51094500655, 2349.3284312038],
    [0.00000000347, 0.62281394535, 1542.6024723678],
    [0.00000000275, 3.38473403113, 4002.8879843164],
    [0.00000000255, 1.52357936497, 1688.2335162393],
    [0.00000000276, 4.32192160071, 1912.5783119412],
    [0.00000000253, 2.40482338279, 97.6761482472],
    [0.00000000248, 4.45058246237, 1688.9842757647],
    [0.000000003, 3.07435583442, 1902.2833712027],
    [0.00000000257, 4.79180478086, 1670.8250285],
    [0.00000000319, 1.34244222683, 1288.4620283063],
    [0.00000000245, 4.01852686769, 1567.7322542814],
    [0.00000000278, 0.25406312148, 874.3940104025],
    [0.00000000324, 5.57824969423, 1670.0742689746],
    [0.000000003, 4.67161812947, 1329.3033769298],
    [0.00000000241, 0.01789818312, 1586.625214729],
    [0.00000000295, 5.86996114913, 2804.2377977311],
    [0.00000000317, 3.17967272487, 1020.025054274],
    [0.00000000238, 4.97765946754, 351.8165923087],
    [0.00000000302, 1.20236375616, 232.0490435337],
    [0.00000000301, 5.53432687957, 2274.5468326365],
    [0.00000000286, 2.41008592059, 2545.3620512544],
    [0.00000000294, 2.01783542485, 313.9441891018],
    [0.00000000292, 2.12690999284, 1592.2542890215],
    [0.0000000025, 2.31712163679, 632.2624744514],
    [0.00000000238, 5.06557054569, 3803.81598288],
    [0.00000000226, 0.05916712753, 1518.2234499796],
    [0.00000000235, 0.16574304942, 137.0330241624],
    [0.00000000298, 2.99720233431, 1467.8208738005],
    [0.00000000286, 5.08357076653, 774.0095491696],
    [0.00000000246, 2.81685822336, 633.305004175],
    [0.00000000269, 4.93023426152, 151.0476698429],
    [0.00000000228, 6.13118739321, 3281.2385647862],
    [0.00000000228, 1.22066024988, 700.4517908797],
    [0.00000000239, 0.71695698501, 1276.6131788903],
    [0.00000000289, 6.08263862565, 3384.3313390048],
    [0.00000000218, 2.90308501961, 85.8272988312],
    [0.00000000283, 6.28058228271, 71.8126531507],
    [0.00000000271, 6.01605074549, 170.7608257851],
    [0.00000000221, 0.99914179141, 1053.7528558967],
    [0.00000000218, 1.50681393471, 1087.6931058405],
    [0.00000000223, 3.39126063354, 3259.8979237838],
    [0.00000000229, 1.19373202707, 1060.8664028975],
    [0.00000000264, 3.93467945263, 1363.2436268736],
    [0.00000000228, 5.04188376116, 1064.7985561606],
    [0.00000000295, 2.1525308639, 6386.16862421],
    [0.00000000214, 3.85961180377, 4223.3006267552],
    [0.00000000218, 0.79681703388, 1909.3969182035],
    [0.00000000212, 4.11706418218, 269.9214467406],
    [0.00000000264, 5.81676406517, 77.962992305],
    [0.00000000256, 5.65978708108, 799.6124118352],
    [0.00000000242, 6.25078283449, 1621.3162241982],
    [0.00000000235, 2.20668997852, 1570.9136480191],
    [0.00000000212, 2.88214546012, 1674.0064222377],
    [0.00000000206, 1.59586787037, 4429.4861751924],
    [0.00000000208, 2.31366614282, 878.3261636656],
    [0.00000000213, 0.30373338388, 8624.2126509272],
    [0.00000000223, 4.88419887133, 1035.002907801],
    [0.00000000279, 3.65173543621, 84.9335269539],
    [0.0000000021, 4.08825553401, 203.7378678824],
    [0.00000000214, 4.63498396475, 812.1425848074],
    [0.00000000258, 1.7350168845, 1887.3055176757],
    [0.0000000021, 4.5179808271, 1262.3860848887],
    [0.00000000252, 5.69246905091, 104.5772469269],
    [0.00000000205, 4.62946016431, 1056.4611688824],
    [0.00000000263, 3.04951219565, 1493.093668066],
    [0.00000000222, 5.54424082649, 5216.5803728014],
    [0.00000000244, 0.91026645686, 3707.8367556622],
    [0.00000000204, 0.90117975859, 1408.0171287602],
    [0.00000000225, 1.23997048012, 3340.6124266998],
    [0.00000000258, 2.35906183505, 2861.753920911],
    [0.00000000267, 3.27705002283, 5120.6011455836],
    [0.00000000214, 0.66988779149, 9146.790069021],
    [0.00000000235, 4.93761209111, 1443.4418514123],
    [0.00000000194, 1.60798828275, 102.5715093568],
    [0.00000000215, 0.97603524747, 479.2883889155],
    [0.00000000205, 5.23642605904, 4649.8988176312],
    [0.00000000257, 4.70227260707, 9050.8108418032],
    [0.00000000228, 6.23410921116, 64.9597385808],
    [0.0000000018, 4.21309134581, 143.9341228421],
    [0.0000000018, 4.82870451226, 1063.5747158832],
    [0.0000000018, 5.06126965624, 52.6901980395],
    [0.00000000226, 0.55334952097, 554.0699874828],
    [0.00000000209, 5.67975843693, 48.7580447764],
    [0.00000000186, 3.66368928017, 108.7218485111],
    [0.0000000019, 2.00852986549, 1058.6311706638],
    [0.00000000183, 3.1735846422, 140.9651774255],
    [0.00000000198, 5.49816579454, 4333.5069479746],
    [0.0000000024, 6.06602357868, 1821.1219388175],
    [0.00000000172, 3.04802064781, 54.3347294422],
    [0.0000000017, 4.66520291204, 1372.5924061081],
    [0.00000000173, 4.72884056307, 77204.32749453338],
    [0.00000000174, 0.85370421252, 1587.5884225755],
    [0.00000000215, 0.68219980704, 1054.7160637432],
    [0.0000000017, 1.52204803308, 5591.9608796002],
    [0.000000002, 1.60275092073, 6681.2248533996],
    [0.00000000193, 2.1300347928, 103.6140390804],
    [0.00000000231, 4.69962389031, 1966.2317178272],
    [0.00000000179, 5.57395905447, 1457.525933062],
    [0.00000000205, 3.65507571128, 906.849787638],
    [0.00000000181, 4.52272934666, 24498.8302462904],
    [0.00000000223, 0.11650319998, 67.8804998876],
    [0.00000000172, 5.68083885227, 1884.124123938],
    [0.00000000219, 0.60964963735, 2729.4561991638],
    [0.00000000164, 1.06675279755, 594.6507036754],
    [0.00000000176, 2.36848603898, 977.4867846211],
    [0.0000000017, 2.430366848, 4532.578949411],
    [0.00000000191, 3.64255924842, 1440.9941708575],
    [0.00000000207, 0.49276008455, 71.6002048296],
    [0.00000000157, 4.26888100582, 5069.3834615064],
    [0.00000000157, 5.14847227422, 451.7279727896],
    [0.00000000158, 5.00063628575, 650.9429865779],
    [0.00000000159, 5.37530499642, 20426.571092422],
    [0.00000000218, 0.27875408082, 175.1660598002],
    [0.00000000155, 0.83696849428, 1474.9344208013],
    [0.00000000154, 2.62839957291, 683.1863154923],
    [0.00000000171, 1.79511736017, 1123.1178284926],
    [0.00000000188, 5.24747110812, 25565.3257234804],
    [0.00000000168, 4.14907553818, 946.727928415],
    [0.00000000203, 2.8369971553, 1489.9122743283],
    [0.00000000173, 4.34546063838, 3046.5988283458],
    [0.0000000019, 5.67865607835, 1060.1326897146],
    [0.00000000201, 2.3852418292, 419.532827985],
    [0.00000000152, 5.8908868579, 208.633228992],
    [0.00000000206, 4.46933127349, 2654.6746005965],
    [0.00000000156, 2.37819796438, 2758.6611466924],
    [0.00000000203, 0.70565514297, 498.1983957056],
    [0.00000000205, 3.05468636546, 1062.302691496],
    [0.00000000174, 3.50824761708, 2004.364753465],
    [0.00000000148, 4.73961194393, 1799.1905969841],
    [0.00000000188, 3.62315953725, 3156.8051495652],
    [0.00000000183, 2.35011338194, 25551.09862947879],
    [0.00000000162, 1.58053710589, 628.5909536192],
    [0.00000000162, 3.99983876824, 1482.7987273275],
    [0.00000000181, 2.85489861839, 1055.1891444952],
    [0.00000000151, 3.43198157222, 629.8629780064],
    [0.00000000157, 3.1519582649, 1025.4416802454],
    [0.00000000194, 5.13049187783, 1818.1529934009],
    [0.00000000193, 1.92287052164, 1140.38330388],
    [0.00000000137, 4.2233522197, 1049.8207026336],
    [0.00000000167, 2.85163087563, 5746.271337896],
    [0.00000000167, 5.73970282991, 5760.4984318976],
    [0.00000000138, 2.23519776527, 1176.7017984094],
    [0.00000000151, 4.89507270899, 532.3992780803],
    [0.00000000147, 2.65931838448, 987.3086446076],
    [0.00000000135, 0.1283641777, 991.7138786227],
    [0.00000000166, 3.12682515439, 580.0935412737],
    [0.00000000118, 5.988105763, 531.387886124],
    [0.00000000135, 5.26601313643, 1065.0110044817],
    [0.00000000138, 3.18511244397, 707.5653378805],
    [0.00000000122, 1.34377059565, 446.3113468182],
    [0.0000000012, 2.29717714347, 1059.2218714948],
    [0.00000000121, 0.58145552537, 5621.8429232104],
    [0.00000000103, 4.75645235023, 1226.2106027112],
    [0.00000000104, 6.08481630139, 528.2546764961],
    [0.00000000119, 1.06475523307, 527.9940440652],
    [0.00000000104, 0.89730746841, 531.1272536931],
    [0.0000000012, 5.39001411803, 1059.5419888836],
    [0.00000000104, 0.44849170648, 1128.534454464],
    [0.00000000117, 5.42449214711, 986.0848043302],
    [0.00000000101, 5.09893554462, 530.5847369719],
    [0.00000000102, 0.26948040239, 450.9772132642],
    [0.00000000107, 1.58724086516, 1069.6768709277],
    [0.00000000086, 2.28711702506, 2498.8916283384],
    [0.00000000101, 1.88318822518, 528.7971932173],
    [0.00000000086, 1.37568728263, 970.5162499722],
    [0.00000000083, 0.06930748288, 530.914805372],
    [0.00000000085, 3.22094000094, 1553.6481726317],
    [0.00000000083, 0.62963097974, 528.4671248172],
    [0.00000000083, 4.16314675511, 849.2642284889],
    [0.00000000079, 3.4668810234, 1077.5411774539],
    [0.00000000097, 0.87886975916, 9690.7081281172],
    [0.00000000097, 4.27398311206, 9676.4810341156],
    [0.00000000101, 0.29639798579, 857.1285350151],
    [0.00000000083, 2.55427333923, 1059.5943785103],
    [0.00000000078, 0.0646149621, 521.8266585684],
    [0.00000000078, 0.76677000862, 525.5463635104],
    [0.00000000096, 0.33631035749, 1090.4014188262],
    [0.00000000098, 1.42815294497, 757.2171545342],
    [0.00000000077, 0.85066773729, 537.5552716208],
    [0.00000000084, 5.04765104413, 1160.027023853],
    [0.00000000076, 3.62264327413, 782.3469364478],
    [0.00000000085, 1.86831145784, 25028.521211385],
    [0.00000000079, 2.9060220289, 2114.8317071153],
];

const L1: &[Term] = &[
    [529.93480757497, 0.0, 0.0],
    [0.00489741194, 4.22066689928, 529.6909650946],
    [0.00228918538, 6.02647464016, 7.1135470008],
    [0.0002765538, 4.57265956824, 1059.3819301892],
    [0.00020720943, 5.45938936295, 522.5774180938],
    [0.00012105732, 0.16985765041, 536.8045120954],
    [0.00006068051, 4.42419502005, 103.0927742186],
    [0.00005433924, 3.98478382565, 419.4846438752],
    [0.00004237795, 5.89009351271, 14.2270940016],
    [0.00002211854, 5.26771446618, 206.1855484372],
    [0.00001295769, 5.55132765087, 3.1813937377],
    [0.00001745919, 4.92669378486, 1589.0728952838],
    [0.00001163411, 0.51450895328, 3.9321532631],
    [0.00001007216, 0.46478398551, 735.8765135318],
    [0.00001173129, 5.8564730435, 1052.2683831884],
    [0.00000847678, 5.7580585045, 110.2063212194],
    [0.00000827329, 4.80312015734, 213.299095438],
    [0.00001003574, 3.15040301822, 426.598190876],
    [0.00001098735, 5.30704981594, 515.463871093],
    [0.00000816397, 0.58643054886, 1066.49547719],
    [0.00000725447, 5.51827471473, 639.897286314],
    [0.00000567845, 5.98867049451, 625.6701923124],
    [0.00000474181, 4.13245269168, 412.3710968744],
    [0.0000041293, 5.73652891261, 95.9792272178],
    [0.00000335817, 3.73248749046, 1162.4747044078],
    [0.00000345249, 4.2415956541, 632.7837393132],
    [0.00000234066, 6.24302226646, 309.2783226558],
    [0.00000194784, 2.21879010911, 323.5054166574],
    [0.0000023434, 4.03469970332, 949.1756089698],
    [0.00000183938, 6.27963588822, 543.9180590962],
    [0.00000198525, 1.50458442825, 838.9692877504],
    [0.00000186899, 6.08620565908, 742.9900605326],
    [0.0000017138, 5.41655983845, 199.0720014364],
    [0.00000130771, 0.62643377351, 728.762966531],
    [0.00000107575, 4.49282760117, 956.2891559706],
    [0.00000115393, 0.68019050174, 846.0828347512],
    [0.00000115047, 5.28641699144, 2118.7638603784],
    [0.00000066824, 5.73365126533, 21.3406410024],
    [0.00000069618, 5.97263450278, 532.8723588323],
    [0.0000006485, 6.08803490288, 1581.959348283],
    [0.00000079686, 5.82412400273, 1045.1548361876],
    [0.00000057939, 0.99453087342, 1596.1864422846],
    [0.00000065635, 0.1292419143, 526.5095713569],
    [0.00000058509, 0.58626971028, 1155.361157407],
    [0.000000566, 1.41198438841, 533.6231183577],
    [0.00000071643, 5.34162650321, 942.062061969],
    [0.00000057368, 5.96851304799, 1169.5882514086],
    [0.00000054935, 5.42806383723, 10.2949407385],
    [0.00000052016, 0.22981299129, 1368.660252845],
    [0.00000052309, 5.72661448388, 117.3198682202],
    [0.00000050418, 6.08075147811, 525.7588118315],
    [0.00000047418, 3.62611843241, 1478.8665740644],
    [0.00000039888, 4.161580136, 1692.1656695024],
    [0.00000046678, 0.51144073175, 1265.5674786264],
    [0.00000032827, 5.03596689455, 220.4126424388],
    [0.00000033558, 0.09913904872, 302.164775655],
    [0.00000029379, 3.35927241533, 4.665866446],
    [0.00000029307, 0.75907909735, 88.865680217],
    [0.00000032449, 5.37492530697, 508.3503240922],
    [0.00000029483, 5.42208897099, 1272.6810256272],
    [0.00000021802, 6.1505405407, 1685.0521225016],
    [0.00000025195, 1.60723063387, 831.8557407496],
    [0.00000021133, 5.863468242, 1258.4539316256],
    [0.00000019747, 2.17205957814, 316.3918696566],
    [0.00000017871, 0.82841413516, 433.7117378768],
    [0.00000017703, 5.95527049039, 5.4166259714],
    [0.0000001723, 2.76395560958, 853.196381752],
    [0.00000017453, 0.70749901224, 1471.7530270636],
    [0.00000017508, 0.49799925173, 1375.7737998458],
    [0.00000014368, 0.9145983114, 18.1592472647],
    [0.00000014107, 0.63031082833, 2.9207613068],
    [0.00000011559, 4.30379009964, 405.2575498736],
    [0.00000011728, 1.76426582357, 380.12776796],
    [0.00000011054, 5.56735602213, 1574.8458012822],
    [0.00000010425, 0.3135503439, 1361.5467058442],
    [0.00000009804, 5.90363777277, 519.3960243561],
    [0.00000009805, 0.38648727979, 1073.6090241908],
    [0.00000009285, 3.2184228753, 1795.258443721],
    [0.00000008864, 0.53776257958, 1788.1448967202],
    [0.0000000837, 5.88484552222, 2001.4439921582],
    [0.00000008148, 5.1016231141, 1485.9801210652],
    [0.00000007658, 5.64890060131, 2648.454825473],
    [0.0000000669, 2.4109345942, 4.192785694],
    [0.0000000584, 4.22347896053, 2008.557539159],
    [0.00000007256, 6.19384525651, 11.0457002639],
    [0.00000006266, 1.36137786945, 1148.2476104062],
    [0.00000005141, 5.23083932012, 628.8515860501],
    [0.0000000514, 2.92955981951, 518.6452648307],
    [0.00000004765, 0.16838181862, 629.6023455755],
    [0.00000004603, 0.78529559911, 721.6494195302],
    [0.00000004575, 6.24794935732, 1677.9385755008],
    [0.00000004537, 4.95096707833, 635.9651330509],
    [0.00000004518, 2.06523915453, 453.424893819],
    [0.00000004414, 0.15381186059, 1699.2792165032],
    [0.00000005593, 5.57489981207, 191.9584544356],
    [0.00000005403, 1.46004886198, 330.6189636582],
    [0.00000004285, 0.23949868127, 2104.5367663768],
    [0.00000004223, 1.44087555881, 2125.8774073792],
    [0.00000004101, 6.19274358942, 636.7158925763],
    [0.00000004432, 4.35811524051, 423.4167971383],
    [0.00000004132, 0.50170694173, 1056.2005364515],
    [0.00000004398, 4.14280286969, 511.5317178299],
    [0.00000005406, 4.40429493698, 2221.856634597],
    [0.00000004467, 0.08534650684, 1062.5633239269],
    [0.00000003569, 5.6654047701, 2317.8358618148],
    [0.00000004007, 2.54845549248, 74.7815985673],
    [0.00000003515, 0.25495124831, 1055.4497769261],
    [0.00000003687, 2.93378008847, 32.2433289144],
    [0.00000002883, 5.72793010505, 99.9113804809],
    [0.00000002969, 5.50054720569, 107.0249274817],
    [0.0000000272, 1.25222590925, 540.7366653585],
    [0.00000002808, 3.30714813896, 0.7507595254],
    [0.00000002768, 1.61339487804, 1063.3140834523],
    [0.00000002666, 4.28662288102, 106.2741679563],
    [0.00000002704, 3.03615556153, 422.6660376129],
    [0.0000000329, 5.8908168215, 1802.3719907218],
    [0.00000002578, 3.60390367979, 750.1036075334],
    [0.00000002661, 0.35249312659, 1898.3512179396],
    [0.00000002486, 5.28950877719, 1891.2376709388],
    [0.00000002936, 1.0905202945, 1464.6394800628],
    [0.0000000319, 4.60740643547, 416.3032501375],
    [0.0000000239, 6.01779736611, 551.031606097],
    [0.00000002214, 5.2445092318, 621.7380390493],
    [0.00000002319, 5.8292030013, 305.3461693927],
    [0.00000002089, 5.99310370434, 1994.3304451574],
    [0.00000002042, 0.75008788531, 142.4496501338],
    [0.00000002121, 0.01537599023, 2420.9286360334],
    [0.00000002114, 6.25308371567, 647.0108333148],
    [0.0000000202, 4.17560390841, 569.0478410098],
    [0.00000002109, 5.18682321403, 227.5261894396],
    [0.00000002283, 5.80043809222, 539.9859058331],
    [0.00000001977, 3.99197009651, 24.3790223882],
    [0.0000000196, 1.35288793079, 963.4027029714],
    [0.00000001903, 2.78349628184, 2428.0421830342],
    [0.00000001915, 4.22134509685, 2324.9494088156],
    [0.00000001971, 5.88715684267, 217.2312487011],
    [0.00000001917, 3.03728154374, 1382.8873468466],
    [0.00000002026, 3.08606488714, 408.4389436113],
    [0.00000001834, 5.61474110217, 430.5303441391],
    [0.00000001838, 1.25467410218, 81.7521332162],
    [0.0000000246, 4.63268678998, 1905.4647649404],
    [0.0000000182, 5.9749792612, 114.1384744825],
    [0.00000002043, 4.34047514845, 70.8494453042],
    [0.00000001959, 4.03116026306, 92.0470739547],
    [0.00000001768, 0.33097462499, 35.4247226521],
    [0.00000002334, 5.8704263847, 1038.0412891868],
    [0.00000001835, 4.81326127892, 124.433415221],
    [0.00000002269, 1.02549350754, 618.5566453116],
    [0.00000001919, 5.01297395549, 99.1606209555],
    [0.00000001923, 0.28688549585, 31.019488637],
    [0.00000001878, 5.69299116574, 210.1177017003],
    [0.00000001679, 0.25635730278, 295.0512286542],
    [0.00000001656, 5.46039280732, 2634.2277314714],
    [0.00000001675, 6.15609073315, 643.8294395771],
    [0.00000001953, 5.09846435548, 17.4084877393],
    [0.00000001539, 2.75316078346, 415.5524906121],
    [0.00000001467, 0.54812675158, 458.8415197904],
    [0.00000001482, 3.76736278426, 534.3568315406],
    [0.00000001446, 3.15802770791, 25.1297819136],
    [0.00000001667, 0.26406950755, 835.0371344873],
    [0.00000001472, 0.83054329617, 28.3111756513],
    [0.00000001655, 0.88908548504, 1781.0313497194],
    [0.00000001294, 5.76241191046, 440.8252848776],
    [0.00000001348, 2.49823510924, 984.6003316219],
    [0.00000001352, 5.10869562455, 149.5631971346],
    [0.00000001344, 0.01942249067, 2214.7430875962],
    [0.00000001188, 2.24279457878, 31.492569389],
    [0.00000001166, 0.80686346228, 739.8086667949],
    [0.00000001322, 4.25691184168, 2538.2485042536],
    [0.00000001094, 6.02985819406, 2737.32050569],
    [0.00000001112, 4.3820436067, 561.934294009],
    [0.00000001346, 3.2057584887, 525.0250986486],
    [0.00000001056, 5.76507115032, 2310.722314814],
    [0.00000001159, 0.4618956497, 67.6680515665],
    [0.00000001027, 0.20709586018, 7.8643065262],
    [0.00000001143, 5.56626418636, 46.470422916],
    [0.00000001012, 0.54293005597, 532.1386456494],
    [0.00000000978, 5.13939194101, 2207.6295405954],
    [0.00000000993, 2.03698185233, 319.5732633943],
    [0.00000001035, 2.90231353535, 611.4430983108],
    [0.00000001021, 4.75651217048, 527.2432845398],
    [0.00000001308, 1.78809336431, 824.7421937488],
    [0.00000000964, 2.82269601958, 2111.6503133776],
    [0.00000000896, 2.54505998806, 2744.4340526908],
    [0.0000000089, 5.41036782817, 28.4541880032],
    [0.00000000906, 0.76565238554, 1439.5096981492],
    [0.00000000985, 0.8868762377, 5760.4984318976],
    [0.00000000983, 1.42102343372, 5746.271337896],
    [0.00000000892, 5.87250060663, 203.0041546995],
    [0.00000000942, 2.31049430734, 9690.7081281172],
    [0.00000000941, 2.84331157527, 9676.4810341156],
    [0.00000000867, 0.81020362547, 524.2743391232],
    [0.00000000829, 2.35178495412, 312.4597163935],
    [0.00000000912, 2.80494184378, 6.2197751235],
    [0.00000000809, 1.05148218513, 529.6427809848],
    [0.00000000779, 4.80009242059, 945.2434557067],
    [0.00000000878, 5.76532521399, 1.6445314027],
    [0.00000000953, 4.30945738629, 209.3669421749],
    [0.00000000772, 5.25607113566, 2950.619601128],
    [0.00000000745, 0.03810558502, 535.107591066],
    [0.00000000744, 0.58381523987, 25.2727942655],
    [0.00000000734, 0.208004851, 1049.0869894507],
    [0.00000000747, 2.71772840871, 38.1330356378],
    [0.00000000728, 5.97210358938, 945.9942152321],
    [0.00000000769, 4.51394016967, 952.3570027075],
    [0.0000000071, 0.38016353553, 69.1525242748],
    [0.0000000076, 3.07033779824, 39.3568759152],
    [0.00000000802, 1.14191463412, 532.6117264014],
    [0.00000000704, 1.2544730812, 547.8502123593],
    [0.00000000721, 0.73855379162, 2228.9701815978],
    [0.00000000794, 4.25051539085, 2641.3412784722],
    [0.00000000795, 3.2058836382, 604.4725636619],
    [0.00000000818, 1.05229815343, 909.8187330546],
    [0.00000000724, 5.68281830264, 953.1077622329],
    [0.00000000836, 0.60410469174, 2097.423219376],
    [0.00000000669, 5.75757140051, 2015.6710861598],
    [0.00000000682, 1.19994890339, 387.2413149608],
    [0.0000000064, 3.91546675664, 528.7277572481],
    [0.00000000809, 4.24929331276, 529.7391492044],
    [0.00000000819, 4.91540072376, 2751.5475996916],
    [0.00000000692, 2.51162384766, 916.9322800554],
    [0.00000000784, 4.23651511312, 195.1398481733],
    [0.00000000762, 1.12201139619, 732.6951197941],
    [0.00000000617, 5.80920925081, 739.0579072695],
    [0.00000000727, 4.24401822698, 760.25553592],
    [0.00000000591, 3.26075006572, 202.2533951741],
    [0.00000000552, 5.83533550039, 526.7702037878],
    [0.0000000064, 1.38530872949, 530.6541729411],
    [0.00000000577, 6.09100925678, 2531.1349572528],
    [0.0000000062, 3.01917904435, 902.7051860538],
    [0.00000000722, 5.18171159557, 1.4844727083],
    [0.0000000054, 3.7880923082, 2957.7331481288],
    [0.00000000523, 3.63882376, 437.6438911399],
    [0.00000000527, 5.80796427555, 3053.7123753466],
    [0.00000000488, 4.99103190309, 483.2205421786],
    [0.00000000557, 4.11381202161, 2854.6403739102],
    [0.00000000492, 0.76371083106, 1603.2999892854],
    [0.00000000487, 5.55383951779, 2627.1141844706],
    [0.00000000487, 5.86510858429, 724.8308132679],
    [0.00000000453, 0.61375011101, 1159.2933106701],
    [0.0000000045, 2.28121042355, 3060.8259223474],
    [0.00000000515, 4.7812605928, 447.7958195265],
    [0.00000000449, 4.70231576312, 934.9485149682],
    [0.0000000045, 1.91049508739, 597.3590166611],
    [0.00000000438, 6.01178917646, 3178.1457905676],
    [0.00000000494, 0.53844942275, 1354.4331588434],
    [0.00000000501, 5.51752195462, 2435.155730035],
    [0.00000000432, 3.64903264921, 313.2104759189],
    [0.00000000435, 3.02449828967, 533.8837507886],
    [0.00000000426, 5.07945534339, 2524.021410252],
    [0.00000000491, 3.592863642, 230.5645708254],
    [0.00000000547, 0.34432090949, 1251.3403846248],
    [0.00000000503, 1.57454509207, 454.9093665273],
    [0.00000000486, 4.39351469958, 462.0229135281],
    [0.00000000524, 2.03003740296, 1279.794572628],
    [0.00000000388, 5.58318013074, 731.9443602687],
    [0.00000000449, 1.11025492739, 56.6223513026],
    [0.00000000398, 5.19943284273, 3267.0114707846],
    [0.00000000416, 1.70821917336, 245.5424243524],
    [0.00000000379, 1.80234948769, 2655.5683724738],
    [0.00000000355, 1.65214516751, 78.7137518304],
    [0.00000000404, 1.72647262603, 1141.1340634054],
    [0.00000000335, 6.01254286794, 960.2213092337],
    [0.00000000331, 1.74086938716, 490.3340891794],
    [0.00000000401, 0.30034336462, 2332.0629558164],
    [0.00000000336, 2.64385574909, 1021.2488945514],
    [0.00000000389, 0.31259289221, 2413.8150890326],
    [0.00000000314, 5.73833529708, 1158.5425511447],
    [0.00000000313, 4.74363791106, 938.1299087059],
    [0.00000000333, 0.80112437148, 1585.1407420207],
    [0.00000000323, 3.5265624528, 3274.1250177854],
    [0.00000000395, 1.73181407631, 1593.0050485469],
    [0.00000000302, 4.64184749164, 1261.6353253633],
    [0.00000000325, 0.54991590409, 43.2890291783],
    [0.00000000293, 0.97977818746, 1585.8915015461],
    [0.00000000341, 2.80833606944, 1514.2912967165],
    [0.00000000304, 6.12522825214, 1262.3860848887],
    [0.00000000286, 2.89800423081, 530.2122299564],
    [0.00000000387, 0.46648572639, 1592.2542890215],
    [0.00000000285, 4.56394598052, 1268.7488723641],
    [0.0000000031, 4.69102289591, 76.2660712756],
    [0.00000000278, 5.49867187248, 280.9671470045],
    [0.00000000358, 5.45926487831, 113.3877149571],
    [0.00000000283, 1.0923050635, 1061.829610744],
    [0.00000000326, 0.60265259639, 827.9235874865],
    [0.00000000284, 5.36580034539, 1165.6560981455],
    [0.00000000281, 5.5463546105, 3370.1042450032],
    [0.00000000269, 3.92616563946, 42.5382696529],
    [0.00000000275, 2.58465453365, 373.0142209592],
    [0.00000000357, 1.39391983207, 1493.093668066],
    [0.00000000258, 5.9667069414, 1269.4996318895],
    [0.00000000259, 2.56026216784, 9146.790069021],
    [0.00000000281, 2.74823090198, 4694.0029547076],
    [0.00000000281, 3.0132465594, 320.3240229197],
    [0.00000000272, 4.1850495892, 8624.2126509272],
    [0.00000000245, 1.24462798353, 252.6559713532],
    [0.00000000244, 2.0289276469, 3377.217792004],
    [0.00000000324, 1.84851618413, 1289.9465010146],
    [0.00000000221, 6.22167997496, 3281.2385647862],
    [0.00000000238, 3.93371505401, 3171.0322435668],
    [0.00000000226, 5.94296271326, 224.3447957019],
    [0.00000000213, 3.6826423475, 1048.3362299253],
    [0.00000000216, 5.82941334164, 1567.7322542814],
    [0.00000000295, 4.70194747095, 3067.9394693482],
    [0.00000000206, 4.98184230959, 1357.6145525811],
    [0.00000000202, 1.32439444045, 4326.3934009738],
    [0.00000000227, 0.78540105705, 59.8037450403],
    [0.00000000237, 5.56926897693, 2943.5060541272],
    [0.00000000207, 0.07907015398, 5223.6939198022],
    [0.00000000199, 3.30501818656, 4120.2078525366],
    [0.00000000194, 5.95526916809, 84.9335269539],
    [0.00000000266, 1.58032565718, 983.1158589136],
    [0.00000000198, 4.31078641704, 4017.115078318],
    [0.00000000198, 0.30166351366, 1166.4068576709],
    [0.00000000188, 0.90738705875, 135.336103133],
    [0.00000000186, 0.69289672485, 92.7978334801],
    [0.00000000182, 1.18931462257, 1512.8068240082],
    [0.00000000191, 1.04146023518, 1884.124123938],
    [0.00000000174, 6.13734594396, 3597.6304344428],
    [0.00000000189, 0.35191512844, 1372.5924061081],
    [0.00000000172, 4.35250972697, 1578.0271950199],
    [0.00000000173, 2.30241719278, 1176.7017984094],
    [0.0000000022, 1.06991056825, 2200.5159935946],
    [0.00000000186, 4.90511103807, 3583.4033404412],
    [0.00000000189, 0.24160744024, 1670.8250285],
    [0.00000000206, 0.01485146863, 2730.2069586892],
    [0.00000000174, 1.83997277029, 746.9222137957],
    [0.00000000225, 3.1310809966, 630.3360587584],
    [0.00000000206, 5.22730929781, 3995.7744373156],
    [0.00000000169, 2.57956682688, 9161.0171630226],
    [0.00000000165, 1.51795928301, 4010.0015313172],
    [0.00000000181, 2.05055200822, 842.9014410135],
    [0.00000000181, 5.96554625357, 1578.7779545453],
    [0.00000000166, 1.551148631, 1070.4276304531],
    [0.00000000157, 5.8783995888, 3914.0223040994],
    [0.0000000016, 0.43729819176, 2545.3620512544],
    [0.00000000168, 5.73975661792, 2847.5268269094],
    [0.00000000157, 2.25764581068, 850.0149880143],
    [0.00000000187, 0.64918748618, 842.1506814881],
    [0.0000000018, 1.88055488803, 685.4739373527],
    [0.00000000153, 4.15259684562, 4333.5069479746],
    [0.00000000154, 3.65536637158, 77734.01845962799],
    [0.00000000151, 3.17795437121, 3590.516887442],
    [0.00000000155, 3.8762354799, 327.4375699205],
    [0.00000000171, 3.33647878498, 1912.5783119412],
    [0.00000000188, 4.53005359421, 1041.2226829245],
    [0.00000000134, 4.09921613445, 530.44172462],
    [0.00000000123, 4.79543460218, 1098.7388061044],
    [0.00000000161, 2.02006564218, 860.3099287528],
    [0.00000000143, 2.40197278329, 529.1697002328],
    [0.00000000115, 1.55831212007, 9153.9036160218],
    [0.00000000106, 5.94313244357, 1057.8974574809],
    [0.00000000119, 5.10578428676, 1056.9342496344],
    [0.000000001, 5.74974781049, 501.2367770914],
    [0.00000000094, 1.40134175492, 1059.3337460794],
    [0.00000000098, 3.79115318281, 497.4476361802],
    [0.0000000009, 4.09610113044, 1064.0477966352],
    [0.00000000102, 1.10442899544, 1969.2006632438],
    [0.00000000087, 0.58218477838, 1173.5204046717],
    [0.00000000109, 3.83745968299, 525.4981794006],
    [0.00000000094, 4.59915291355, 1059.430114299],
    [0.00000000118, 6.11701561559, 1069.6768709277],
    [0.00000000107, 5.40509332689, 679.2541622292],
    [0.00000000089, 5.90037690244, 757.2171545342],
    [0.00000000078, 6.06217863109, 970.5162499722],
    [0.0000000008, 5.45470236239, 3163.918696566],
    [0.00000000072, 5.65789862232, 1151.4290041439],
    [0.0000000008, 0.045397201, 1080.7225711916],
    [0.00000000075, 4.26526686574, 1058.4187223427],
];

const L2: &[Term] = &[
    [0.00047233598, 4.32148323554, 7.1135470008],
    [0.00030629053, 2.93021440216, 529.6909650946],
    [0.0003896555, 0.0, 0.0],
    [0.00003189317, 1.05504615595, 522.5774180938],
    [0.00002723358, 3.41411526638, 1059.3819301892],
    [0.00002729292, 4.84545481351, 536.8045120954],
    [0.00001721069, 4.18734385158, 14.2270940016],
    [0.00000383258, 5.76790714387, 419.4846438752],
    [0.00000367498, 6.05509120409, 103.0927742186],
    [0.00000377524, 0.76048964872, 515.463871093],
    [0.00000337386, 3.78644384244, 3.1813937377],
    [0.000003082, 0.69356654052, 206.1855484372],
    [0.00000218408, 3.81389191353, 1589.0728952838],
    [0.00000198883, 5.33996443444, 1066.49547719],
    [0.00000197445, 2.48356402053, 3.9321532631],
    [0.0000014623, 3.81373196838, 639.897286314],
    [0.00000155862, 1.40642426467, 1052.2683831884],
    [0.0000012957, 5.83738872525, 412.3710968744],
    [0.00000141932, 1.63435169016, 426.598190876],
    [0.00000117327, 1.41435462588, 625.6701923124],
    [0.00000096733, 4.03383427887, 110.2063212194],
    [0.00000090823, 1.10630629042, 95.9792272178],
    [0.00000078769, 4.63726131329, 543.9180590962],
    [0.00000072392, 2.21716670026, 735.8765135318],
    [0.00000087292, 2.52235174825, 632.7837393132],
    [0.0000005691, 3.12292059854, 213.299095438],
    [0.00000048622, 1.67283791618, 309.2783226558],
    [0.00000058475, 0.83216317444, 199.0720014364],
    [0.0000004015, 4.0248544474, 21.3406410024],
    [0.00000039784, 0.62416945827, 323.5054166574],
    [0.00000035718, 2.32581247002, 728.762966531],
    [0.0000002562, 2.51240623862, 1162.4747044078],
    [0.00000029255, 3.60838327799, 10.2949407385],
    [0.00000023591, 3.00532139306, 956.2891559706],
    [0.00000027814, 3.23992013743, 838.9692877504],
    [0.00000025993, 4.5011829829, 742.9900605326],
    [0.00000025194, 1.21868110687, 1045.1548361876],
    [0.00000019458, 4.29028644674, 532.8723588323],
    [0.0000001766, 0.8095394156, 508.3503240922],
    [0.00000015355, 5.81037986941, 1596.1864422846],
    [0.00000017058, 4.20001977723, 2118.7638603784],
    [0.0000001704, 1.8340214664, 526.5095713569],
    [0.00000014661, 3.99989622586, 117.3198682202],
    [0.00000013639, 1.80336677963, 302.164775655],
    [0.0000001323, 2.51856643603, 88.865680217],
    [0.00000012756, 4.36856232414, 1169.5882514086],
    [0.00000015292, 0.68174165476, 942.062061969],
    [0.00000010986, 4.43586634639, 525.7588118315],
    [0.0000001392, 5.95169568482, 316.3918696566],
    [0.00000009437, 2.17684563456, 1155.361157407],
    [0.00000008812, 3.29452783338, 220.4126424388],
    [0.00000007823, 5.75672228354, 846.0828347512],
    [0.00000007549, 2.70955516779, 533.6231183577],
    [0.00000009681, 1.71563161051, 1581.959348283],
    [0.0000000869, 3.31924493607, 831.8557407496],
    [0.00000006285, 0.49939863541, 949.1756089698],
    [0.00000006685, 2.17560093281, 1265.5674786264],
    [0.00000005381, 6.00510875948, 405.2575498736],
    [0.00000004676, 1.40846192799, 1258.4539316256],
    [0.00000004421, 3.02360159274, 1692.1656695024],
    [0.00000004403, 5.4773726616, 433.7117378768],
    [0.00000004286, 5.07139951645, 1073.6090241908],
    [0.00000004201, 5.28560721767, 18.1592472647],
    [0.00000003933, 1.26665387164, 853.196381752],
    [0.00000005351, 3.65320121089, 1272.6810256272],
    [0.00000004392, 2.27325303667, 1368.660252845],
    [0.00000003482, 1.53983001273, 519.3960243561],
    [0.00000002745, 2.09685315627, 1478.8665740644],
    [0.00000002737, 1.06017230524, 1574.8458012822],
    [0.00000002897, 2.05128453665, 1361.5467058442],
    [0.00000003075, 0.99085727534, 191.9584544356],
    [0.00000002462, 2.37173605635, 1471.7530270636],
    [0.00000002203, 2.47960567714, 721.6494195302],
    [0.00000002096, 3.71482580504, 1485.9801210652],
    [0.00000001984, 1.88475229557, 1685.0521225016],
    [0.00000002274, 3.03360234351, 1148.2476104062],
    [0.00000002041, 6.17114556019, 330.6189636582],
    [0.00000001451, 4.72055072637, 32.2433289144],
    [0.00000001454, 5.14703918585, 1375.7737998458],
    [0.00000001447, 3.18833439444, 635.9651330509],
    [0.00000001403, 4.26712075104, 551.031606097],
    [0.0000000142, 1.99288040133, 629.6023455755],
    [0.00000001269, 0.03300387779, 2125.8774073792],
    [0.00000001276, 2.26356919237, 1788.1448967202],
    [0.00000001189, 1.70223550488, 1677.9385755008],
    [0.00000001182, 2.18142313946, 1795.258443721],
    [0.00000001366, 1.27629917215, 1038.0412891868],
    [0.00000001306, 4.76302079847, 1062.5633239269],
    [0.00000001109, 2.97787130235, 81.7521332162],
    [0.00000001027, 1.99236027398, 295.0512286542],
    [0.00000001349, 4.01621534182, 539.9859058331],
    [0.00000001025, 3.75336759986, 28.4541880032],
    [0.00000000977, 3.01355125761, 124.433415221],
    [0.0000000129, 4.62594234857, 2648.454825473],
    [0.00000001065, 5.06153058155, 1699.2792165032],
    [0.00000000965, 1.17716405513, 99.9113804809],
    [0.00000001021, 1.9071210266, 750.1036075334],
    [0.00000000923, 3.53450109212, 227.5261894396],
    [0.00000001059, 0.13532061468, 416.3032501375],
    [0.00000000836, 2.07492422755, 1056.2005364515],
    [0.00000000889, 1.75177808106, 1898.3512179396],
    [0.00000000772, 2.89217715561, 2008.557539159],
    [0.00000001014, 2.80847772922, 1464.6394800628],
    [0.0000000082, 1.99735697577, 2111.6503133776],
    [0.00000000787, 4.91912237671, 1055.4497769261],
    [0.00000000743, 2.6520965069, 106.2741679563],
    [0.00000000705, 0.08006443278, 963.4027029714],
    [0.00000000724, 3.29664246938, 628.8515860501],
    [0.00000000791, 1.6465520211, 2001.4439921582],
    [0.00000000822, 2.74067639972, 618.5566453116],
    [0.00000000761, 1.26393500358, 1382.8873468466],
    [0.0000000065, 1.19590511216, 422.6660376129],
    [0.00000000677, 1.88476058357, 2104.5367663768],
    [0.00000000681, 5.47481665606, 5760.4984318976],
    [0.00000000681, 3.11621209674, 5746.271337896],
    [0.00000000644, 4.68385640894, 611.4430983108],
    [0.00000000752, 3.03497138894, 2221.856634597],
    [0.00000000641, 1.86274530783, 636.7158925763],
    [0.00000000614, 3.0767735667, 380.12776796],
    [0.00000000635, 4.53916684689, 9676.4810341156],
    [0.00000000635, 0.61458805483, 9690.7081281172],
    [0.00000000822, 6.25170365084, 423.4167971383],
    [0.00000000762, 4.32362906505, 1802.3719907218],
    [0.00000000582, 0.84137872868, 1891.2376709388],
    [0.00000000558, 3.96171840325, 440.8252848776],
    [0.00000000624, 2.83657771014, 1905.4647649404],
    [0.00000000711, 3.43538032357, 824.7421937488],
    [0.00000000517, 1.10660016329, 107.0249274817],
    [0.00000000535, 1.55761050176, 1994.3304451574],
    [0.00000000501, 4.44389802599, 647.0108333148],
    [0.00000000414, 5.37130370397, 2228.9701815978],
    [0.00000000533, 2.54756313371, 1781.0313497194],
    [0.00000000393, 1.26351262287, 210.1177017003],
    [0.00000000433, 2.90103969634, 1063.3140834523],
    [0.00000000384, 1.36194621083, 203.0041546995],
    [0.0000000044, 1.46934545869, 2214.7430875962],
    [0.00000000424, 4.98974282486, 3178.1457905676],
    [0.00000000338, 2.72210106345, 2324.9494088156],
    [0.00000000332, 0.37505564414, 2655.5683724738],
    [0.00000000318, 6.11024720065, 934.9485149682],
    [0.00000000405, 3.51005860013, 2751.5475996916],
    [0.00000000388, 5.00609647265, 2015.6710861598],
    [0.00000000424, 4.29668654117, 5753.3848848968],
    [0.00000000328, 2.35571531981, 1251.3403846248],
    [0.00000000316, 0.16949503062, 1279.794572628],
    [0.00000000345, 2.89328206121, 2957.7331481288],
    [0.00000000303, 1.63964826684, 2428.0421830342],
    [0.00000000328, 3.36132375845, 1141.1340634054],
    [0.00000000294, 2.48947693371, 2641.3412784722],
    [0.0000000035, 1.50537240918, 2317.8358618148],
    [0.00000000287, 1.69638214958, 2420.9286360334],
    [0.00000000272, 0.27466529753, 319.5732633943],
    [0.00000000303, 2.43034117616, 70.8494453042],
    [0.00000000251, 0.43544711316, 3259.8979237838],
    [0.00000000224, 4.49752269293, 5223.6939198022],
    [0.00000000272, 2.98590404673, 1457.525933062],
    [0.00000000228, 5.47896916415, 1603.2999892854],
    [0.00000000288, 2.30146999217, 2854.6403739102],
    [0.00000000207, 5.94297320087, 9153.9036160218],
    [0.00000000243, 1.58604251447, 2744.4340526908],
    [0.00000000228, 1.28182702946, 2310.722314814],
    [0.00000000224, 1.28623905132, 3060.8259223474],
    [0.00000000222, 0.63265553397, 3163.918696566],
    [0.00000000242, 2.52382905368, 3274.1250177854],
    [0.00000000188, 6.00513627145, 92.0470739547],
    [0.00000000239, 1.93897157244, 2413.8150890326],
    [0.00000000214, 1.14529237568, 2531.1349572528],
    [0.000000002, 3.42280996072, 99.1606209555],
    [0.00000000179, 0.53892926207, 2207.6295405954],
    [0.00000000177, 5.56545270243, 2332.0629558164],
    [0.00000000172, 1.38604067808, 945.9942152321],
    [0.00000000203, 0.41899069603, 2840.4132799086],
    [0.00000000231, 2.2635333046, 2097.423219376],
    [0.00000000228, 3.82701076821, 113.3877149571],
    [0.00000000165, 4.08776703733, 6283.0758499914],
    [0.00000000202, 3.30429764992, 3067.9394693482],
    [0.00000000224, 3.69285208525, 2435.155730035],
    [0.00000000214, 2.55756944911, 2538.2485042536],
    [0.00000000203, 2.24205059922, 67.6680515665],
    [0.00000000152, 5.48122906518, 10213.285546211],
    [0.00000000191, 2.68685722531, 1773.9178027186],
    [0.00000000189, 2.95184620359, 732.6951197941],
    [0.00000000149, 1.98737542735, 1049.0869894507],
    [0.00000000163, 1.24084734609, 3053.7123753466],
    [0.00000000171, 2.34210749987, 1354.4331588434],
    [0.00000000112, 5.7740728579, 547.8502123593],
    [0.00000000124, 0.14001204498, 860.3099287528],
    [0.00000000086, 1.26924601636, 511.5317178299],
    [0.00000000114, 5.1598283807, 1592.2542890215],
    [0.00000000091, 1.48896790758, 1567.7322542814],
    [0.00000000086, 4.34444949905, 1069.6768709277],
];

const L3: &[Term] = &[
    [0.00006501665, 2.59862880482, 7.1135470008],
    [0.00001356524, 1.34635886411, 529.6909650946],
    [0.00000470716, 2.47503977883, 14.2270940016],
    [0.0000041696, 3.24451243214, 536.8045120954],
    [0.00000352851, 2.97360159003, 522.5774180938],
    [0.0000015488, 2.07565585817, 1059.3819301892],
    [0.00000086771, 2.51431584316, 515.463871093],
    [0.00000033538, 3.82633794497, 1066.49547719],
    [0.00000044378, 0.0, 0.0],
    [0.00000022644, 2.98231326774, 543.9180590962],
    [0.00000023737, 1.27667172313, 412.3710968744],
    [0.00000028457, 2.44754756058, 206.1855484372],
    [0.00000019798, 2.10099934005, 639.897286314],
    [0.0000001974, 1.40255938973, 419.4846438752],
    [0.00000018768, 1.593684035, 103.0927742186],
    [0.00000017033, 2.30214681202, 21.3406410024],
    [0.00000016774, 2.59821460673, 1589.0728952838],
    [0.00000016214, 3.14521117299, 625.6701923124],
    [0.00000016055, 3.36030126297, 1052.2683831884],
    [0.00000013392, 2.75973892202, 95.9792272178],
    [0.00000013234, 2.5386224434, 199.0720014364],
    [0.00000012611, 6.265781104, 426.598190876],
    [0.00000008637, 2.26563256289, 110.2063212194],
    [0.00000006725, 3.42566433316, 309.2783226558],
    [0.00000008701, 1.76334960737, 10.2949407385],
    [0.00000006527, 4.03869562907, 728.762966531],
    [0.00000005368, 5.25196153539, 323.5054166574],
    [0.00000005675, 2.52096417685, 508.3503240922],
    [0.00000005399, 2.91184687105, 1045.1548361876],
    [0.00000003996, 4.30290261177, 88.865680217],
    [0.00000003857, 3.52381361552, 302.164775655],
    [0.00000003774, 4.09125315146, 735.8765135318],
    [0.00000003269, 1.43175991274, 956.2891559706],
    [0.00000002783, 4.3581750767, 1596.1864422846],
    [0.00000002661, 1.25276590759, 213.299095438],
    [0.00000002553, 2.23785673285, 117.3198682202],
    [0.00000002371, 2.89662409244, 742.9900605326],
    [0.00000002656, 5.01505839848, 838.9692877504],
    [0.00000001948, 2.77248294666, 1169.5882514086],
    [0.00000002279, 2.3558187123, 942.062061969],
    [0.00000001474, 1.61011468581, 220.4126424388],
    [0.00000001457, 3.09381959396, 2118.7638603784],
    [0.00000001937, 5.01388256693, 831.8557407496],
    [0.00000001585, 1.40097680805, 405.2575498736],
    [0.00000001257, 3.97811260358, 1155.361157407],
    [0.00000001227, 3.45959919972, 1073.6090241908],
    [0.00000000986, 3.39209446167, 532.8723588323],
    [0.00000000942, 2.70200385825, 191.9584544356],
    [0.00000000828, 1.48348768286, 632.7837393132],
    [0.00000000797, 1.1070668885, 1162.4747044078],
    [0.00000000822, 3.30295824153, 1258.4539316256],
    [0.0000000071, 5.8979877198, 853.196381752],
    [0.00000000766, 3.66351539483, 1581.959348283],
    [0.00000000722, 3.74673245797, 433.7117378768],
    [0.00000000663, 2.93063953915, 1574.8458012822],
    [0.00000000658, 3.52797311863, 525.7588118315],
    [0.00000000609, 4.14881313523, 721.6494195302],
    [0.00000000598, 4.69454609357, 81.7521332162],
    [0.00000000668, 1.96442971289, 1272.6810256272],
    [0.00000000515, 1.57251270902, 949.1756089698],
    [0.00000000658, 2.02329201466, 526.5095713569],
    [0.00000000517, 4.35827478516, 1368.660252845],
    [0.0000000051, 4.95846155301, 1148.2476104062],
    [0.00000000507, 4.31396370095, 330.6189636582],
    [0.00000000567, 2.27813343743, 551.031606097],
    [0.0000000048, 3.86758235988, 1361.5467058442],
    [0.00000000383, 0.24287136454, 611.4430983108],
    [0.00000000434, 2.9546175554, 1038.0412891868],
    [0.00000000377, 1.42957648215, 124.433415221],
    [0.00000000391, 4.07770324592, 1471.7530270636],
    [0.00000000385, 4.702951798, 519.3960243561],
    [0.00000000428, 2.22472522305, 539.9859058331],
    [0.00000000343, 4.83463725823, 2125.8774073792],
    [0.00000000394, 4.52891996323, 1464.6394800628],
    [0.00000000305, 2.02797683648, 1485.9801210652],
    [0.00000000283, 0.97461612169, 1905.4647649404],
    [0.00000000276, 3.83552772064, 1062.5633239269],
    [0.00000000351, 2.06334334462, 533.6231183577],
    [0.00000000304, 3.93228052293, 1685.0521225016],
    [0.00000000322, 3.54763044791, 846.0828347512],
    [0.00000000345, 4.18332148409, 1788.1448967202],
    [0.00000000253, 3.12703531516, 1994.3304451574],
    [0.00000000257, 1.05361498985, 1478.8665740644],
    [0.00000000232, 1.69999081817, 1692.1656695024],
    [0.00000000225, 2.5162414978, 1891.2376709388],
    [0.00000000217, 4.58512911216, 963.4027029714],
    [0.00000000277, 3.63353707701, 1677.9385755008],
    [0.00000000242, 2.90163762388, 2310.722314814],
    [0.00000000211, 3.96419403991, 295.0512286542],
    [0.00000000199, 5.1704650075, 618.5566453116],
    [0.00000000256, 4.19052619061, 1781.0313497194],
    [0.00000000192, 0.81556540966, 2221.856634597],
    [0.00000000187, 3.49895198981, 2648.454825473],
    [0.00000000208, 4.11838429822, 2097.423219376],
    [0.00000000183, 3.30680692414, 1699.2792165032],
    [0.00000000231, 2.54516792766, 1375.7737998458],
    [0.00000000189, 5.74277274755, 2627.1141844706],
    [0.00000000214, 5.48031974537, 1354.4331588434],
    [0.0000000022, 3.8747198941, 2104.5367663768],
    [0.00000000171, 6.10827209399, 1382.8873468466],
    [0.00000000184, 5.98415847544, 750.1036075334],
    [0.00000000171, 5.25744961028, 824.7421937488],
    [0.00000000151, 4.30799091626, 2001.4439921582],
    [0.0000000014, 4.2708946607, 1265.5674786264],
    [0.00000000097, 4.67188056608, 647.0108333148],
    [0.00000000088, 2.43775210355, 440.8252848776],
    [0.00000000075, 3.93105183253, 1055.4497769261],
    [0.00000000079, 1.8853315322, 934.9485149682],
    [0.00000000077, 3.80503143236, 1603.2999892854],
];

const L4: &[Term] = &[
    [0.00000669483, 0.8528242109, 7.1135470008],
    [0.00000099961, 0.74258947751, 14.2270940016],
    [0.00000114019, PI, 0.0],
    [0.00000050024, 1.65346208248, 536.8045120954],
    [0.00000043585, 5.82026386621, 529.6909650946],
    [0.00000031813, 4.8582998665, 522.5774180938],
    [0.00000014742, 4.29061635784, 515.463871093],
    [0.00000008899, 0.71478520741, 1059.3819301892],
    [0.00000004957, 1.29502259434, 543.9180590962],
    [0.00000004484, 2.31715516627, 1066.49547719],
    [0.00000004251, 0.48326797501, 21.3406410024],
    [0.000000031, 3.00245542678, 412.3710968744],
    [0.00000002055, 0.39858940218, 639.897286314],
    [0.00000001762, 4.90536207307, 625.6701923124],
    [0.00000001902, 4.25925620271, 199.0720014364],
    [0.00000001695, 4.26147580803, 206.1855484372],
    [0.00000001375, 5.25546955667, 1052.2683831884],
    [0.00000001203, 4.71614633845, 95.9792272178],
    [0.00000001086, 1.28604571172, 1589.0728952838],
    [0.00000000982, 4.77990073662, 1045.1548361876],
    [0.00000000935, 6.05847062188, 88.865680217],
    [0.00000000916, 5.77537499431, 728.762966531],
    [0.0000000089, 4.55299189579, 426.598190876],
    [0.00000000784, 3.4016156795, 419.4846438752],
    [0.00000000768, 3.54672049322, 103.0927742186],
    [0.0000000067, 0.522233077, 110.2063212194],
    [0.00000000415, 5.22809480633, 302.164775655],
    [0.00000000393, 6.24184621807, 956.2891559706],
    [0.00000000381, 5.2546696604, 309.2783226558],
    [0.00000000421, 0.59561318533, 117.3198682202],
    [0.00000000346, 4.78348312106, 508.3503240922],
    [0.00000000319, 3.47979828725, 323.5054166574],
    [0.00000000331, 2.95893485883, 1596.1864422846],
    [0.00000000295, 4.32713459459, 942.062061969],
    [0.00000000319, 0.47990052824, 831.8557407496],
    [0.00000000251, 1.79898001222, 1073.6090241908],
    [0.00000000212, 0.43917684084, 220.4126424388],
    [0.00000000188, 1.12654974776, 1169.5882514086],
    [0.00000000188, 2.16135407548, 1361.5467058442],
    [0.0000000018, 3.43266428069, 1148.2476104062],
    [0.00000000164, 1.92864127211, 2118.7638603784],
    [0.00000000157, 3.02963907392, 1272.6810256272],
    [0.00000000093, 5.60436000012, 1581.959348283],
    [0.00000000085, 5.023172562, 1155.361157407],
    [0.00000000075, 3.13198879608, 632.7837393132],
];

const L5: &[Term] = &[
    [0.00000049577, 5.25658966184, 7.1135470008],
    [0.00000015761, 5.25126837478, 14.2270940016],
    [0.00000004343, 0.01461869263, 536.8045120954],
    [0.00000001526, 1.09739911439, 522.5774180938],
    [0.00000000728, 5.85949047619, 543.9180590962],
    [0.00000000694, 0.87382487754, 515.463871093],
    [0.00000000845, PI, 0.0],
    [0.00000000456, 0.81521692852, 1066.49547719],
    [0.00000000293, 5.62909357048, 1059.3819301892],
    [0.0000000009, 0.2117811971, 529.6909650946],
];

const B0: &[Term] = &[
    [0.02268615703, 3.55852606718, 529.6909650946],
    [0.00109971634, 3.90809347389, 1059.3819301892],
    [0.00110090358, 0.0, 0.0],
    [0.00008101427, 3.60509573368, 522.5774180938],
    [0.00006043996, 4.25883108794, 1589.0728952838],
    [0.00006437782, 0.30627121409, 536.8045120954],
    [0.0000110688, 2.98534421928, 1162.4747044078],
    [0.00000941651, 2.93619072405, 1052.2683831884],
    [0.00000894088, 1.75447429921, 7.1135470008],
    [0.0000076728, 2.1547359406, 632.7837393132],
    [0.00000944328, 1.67522288396, 426.598190876],
    [0.0000068422, 3.67808770098, 213.299095438],
    [0.00000629223, 0.64343282328, 1066.49547719],
    [0.00000835861, 5.17881973234, 103.0927742186],
    [0.0000053167, 2.70305954352, 110.2063212194],
    [0.00000558524, 0.01354830508, 846.0828347512],
    [0.00000464449, 1.17337249185, 949.1756089698],
    [0.00000431072, 2.60825000494, 419.4846438752],
    [0.00000351433, 4.61062990714, 2118.7638603784],
    [0.00000123148, 3.34968181384, 1692.1656695024],
    [0.00000115038, 5.04892295442, 316.3918696566],
    [0.0000013216, 4.7781699067, 742.9900605326],
    [0.00000103402, 2.31878999565, 1478.8665740644],
    [0.00000116379, 1.38688232033, 323.5054166574],
    [0.0000010242, 3.15293785436, 1581.959348283],
    [0.00000103762, 3.7010383811, 515.463871093],
    [0.0000007865, 3.98318653238, 1265.5674786264],
    [0.00000069935, 2.56006216424, 956.2891559706],
    [0.00000055597, 0.37500753017, 1375.7737998458],
    [0.00000051986, 0.99007119033, 1596.1864422846],
    [0.00000055194, 0.40176412035, 525.7588118315],
    [0.00000063456, 4.50073574333, 735.8765135318],
    [0.00000049691, 0.18649893085, 543.9180590962],
    [0.00000048831, 3.57260550671, 533.6231183577],
    [0.00000028353, 1.53532744749, 625.6701923124],
    [0.00000029209, 5.43145863011, 206.1855484372],
    [0.00000023255, 5.95197992848, 838.9692877504],
    [0.00000022841, 6.19262787685, 532.8723588323],
    [0.00000023202, 4.06473368575, 526.5095713569],
    [0.00000024436, 6.10947656959, 1169.5882514086],
    [0.00000021116, 4.96322972735, 2648.454825473],
    [0.00000017879, 3.08704395969, 1795.258443721],
    [0.00000016234, 4.83515727869, 1368.660252845],
    [0.00000021314, 2.69476951059, 1045.1548361876],
    [0.0000001574, 1.15130330106, 942.062061969],
    [0.00000017325, 1.61550009206, 14.2270940016],
    [0.00000013396, 2.30539585502, 853.196381752],
    [0.00000011904, 3.09811974536, 2111.6503133776],
    [0.00000011734, 2.83006431723, 2008.557539159],
    [0.00000011291, 0.98957560201, 433.7117378768],
    [0.0000001183, 4.76527836803, 309.2783226558],
    [0.00000010702, 3.70181397065, 2221.856634597],
    [0.00000010815, 5.81958878617, 1272.6810256272],
    [0.00000013505, 3.2812697576, 1155.361157407],
    [0.00000010179, 2.58691128827, 117.3198682202],
    [0.00000010632, 5.23487936086, 95.9792272178],
    [0.00000008771, 0.40456546655, 220.4126424388],
    [0.00000007439, 2.94638292086, 412.3710968744],
    [0.00000006151, 2.69100382247, 380.12776796],
    [0.00000005028, 0.72750312028, 1055.4497769261],
    [0.00000004939, 0.73756716762, 1905.4647649404],
    [0.00000005421, 4.08612438558, 1685.0521225016],
    [0.00000005936, 4.32059910537, 1063.3140834523],
    [0.00000004737, 4.0930301685, 527.2432845398],
    [0.0000000401, 0.51530008355, 1073.6090241908],
    [0.00000004709, 1.84067645204, 984.6003316219],
    [0.00000003974, 1.33608029246, 2125.8774073792],
    [0.00000003762, 3.58647039394, 529.7391492044],
    [0.00000004731, 6.16377350841, 532.1386456494],
    [0.00000004666, 5.88762905802, 639.897286314],
    [0.00000003763, 0.38865925413, 529.6427809848],
    [0.00000003409, 4.05398247269, 1898.3512179396],
    [0.00000003457, 3.43865563497, 1485.9801210652],
    [0.00000004229, 2.23767157901, 74.7815985673],
    [0.00000003091, 0.16470256025, 1699.2792165032],
    [0.00000002975, 0.72268908074, 530.6541729411],
    [0.00000003162, 1.2504841642, 330.6189636582],
    [0.00000002727, 4.37679213321, 149.5631971346],
    [0.00000002837, 0.05987107395, 1439.5096981492],
    [0.00000002983, 3.2525120722, 528.7277572481],
    [0.00000002232, 0.26149880534, 1062.5633239269],
    [0.00000002464, 1.1691330442, 453.424893819],
    [0.00000002596, 3.30510149086, 2324.9494088156],
    [0.00000001988, 2.85269577619, 1574.8458012822],
    [0.00000002527, 5.9445820295, 909.8187330546],
    [0.00000002269, 1.30379329597, 3.9321532631],
    [0.00000001742, 4.49909767044, 1258.4539316256],
    [0.00000001714, 4.12945878208, 2001.4439921582],
    [0.00000002029, 3.97938086639, 1056.2005364515],
    [0.00000001667, 0.36037092553, 10213.285546211],
    [0.00000001579, 6.11640144795, 1802.3719907218],
    [0.00000001393, 3.69324470827, 2214.7430875962],
    [0.00000001604, 1.98841031703, 38.1330356378],
    [0.00000001325, 1.74025919863, 529.1697002328],
    [0.00000001451, 2.39804501178, 2428.0421830342],
    [0.00000001594, 2.07556780757, 1021.2488945514],
    [0.0000000132, 1.33770977126, 618.5566453116],
    [0.00000001346, 3.2759149254, 2641.3412784722],
    [0.0000000123, 0.1955272822, 305.3461693927],
    [0.00000001223, 2.86681556337, 1382.8873468466],
    [0.00000001324, 2.23549334986, 530.2122299564],
    [0.00000001056, 3.80579750957, 76.2660712756],
    [0.0000000105, 4.68011652614, 1788.1448967202],
    [0.00000001226, 5.34003255221, 3178.1457905676],
    [0.00000001009, 3.19608028376, 2538.2485042536],
    [0.00000001266, 3.04704446731, 604.4725636619],
    [0.00000000954, 3.86932544808, 728.762966531],
    [0.00000001124, 1.5956036748, 3.1813937377],
    [0.00000000978, 0.25223689838, 983.1158589136],
    [0.00000000948, 0.21552742733, 750.1036075334],
    [0.00000000946, 3.9392774812, 508.3503240922],
    [0.0000000092, 1.14672086939, 963.4027029714],
    [0.00000000817, 5.93809619876, 831.8557407496],
    [0.0000000077, 2.96062737592, 526.7702037878],
    [0.00000001017, 5.55711112145, 199.0720014364],
    [0.00000000761, 1.38163787157, 532.6117264014],
    [0.00000000726, 3.98337964395, 2317.8358618148],
    [0.00000000862, 0.87975657414, 490.3340891794],
    [0.00000000868, 3.44331872364, 569.0478410098],
    [0.00000000711, 4.11107052823, 2751.5475996916],
    [0.00000000708, 0.33555577415, 528.9402055692],
    [0.00000000708, 4.00539820601, 530.44172462],
    [0.00000000656, 4.39568451439, 519.3960243561],
    [0.00000000801, 4.03984430862, 1364.7280995819],
    [0.00000000679, 1.18645749024, 525.4981794006],
    [0.00000000645, 5.10510349996, 1361.5467058442],
    [0.00000000668, 3.15607509055, 533.8837507886],
    [0.00000000663, 0.73722024843, 5223.6939198022],
    [0.00000000663, 1.57092786811, 6283.0758499914],
    [0.00000000543, 0.26376529935, 227.5261894396],
    [0.00000000525, 6.22318693939, 539.9859058331],
    [0.00000000513, 4.98337900151, 302.164775655],
    [0.00000000544, 2.22227019273, 2744.4340526908],
    [0.00000000532, 2.62425372687, 99.1606209555],
    [0.00000000602, 1.56074089013, 454.9093665273],
    [0.00000000518, 0.26343805959, 551.031606097],
    [0.00000000516, 1.09376390349, 934.9485149682],
    [0.00000000659, 0.62560671589, 1512.8068240082],
    [0.00000000524, 0.64710955846, 524.0618908021],
    [0.00000000516, 3.69478866795, 535.3200393871],
    [0.00000000491, 3.63039940597, 2531.1349572528],
    [0.0000000057, 0.61976758791, 540.7366653585],
    [0.00000000496, 2.19398015038, 1514.2912967165],
    [0.00000000532, 0.20040217534, 525.0250986486],
    [0.00000000493, 0.39160693598, 224.3447957019],
    [0.00000000449, 0.62392433691, 529.5309064002],
    [0.00000000449, 3.71676131146, 529.851023789],
    [0.0000000045, 5.02467015031, 1048.3362299253],
    [0.00000000428, 5.4480466029, 11.0457002639],
    [0.00000000499, 4.13924061941, 534.3568315406],
    [0.00000000528, 1.76471074936, 524.2743391232],
    [0.00000000454, 4.53321742354, 1056.9342496344],
    [0.0000000052, 2.57406093768, 535.107591066],
    [0.00000000398, 1.40345870113, 960.2213092337],
    [0.00000000457, 4.17708652827, 2104.5367663768],
    [0.00000000505, 5.36536256321, 1057.8974574809],
    [0.00000000535, 4.80455380313, 1593.0050485469],
    [0.00000000415, 0.96548127237, 2435.155730035],
    [0.00000000519, 0.54543519483, 1061.829610744],
    [0.00000000359, 4.02704454075, 1059.430114299],
    [0.00000000356, 2.66818105522, 835.0371344873],
    [0.00000000443, 5.27513700376, 1.4844727083],
    [0.00000000358, 5.94423960514, 440.8252848776],
    [0.00000000471, 6.05791940453, 1471.7530270636],
    [0.00000000386, 2.15984900214, 9153.9036160218],
    [0.00000000424, 2.7092967003, 1038.0412891868],
    [0.00000000359, 0.82922836987, 1059.3337460794],
    [0.0000000031, 0.88102053266, 529.9034134157],
    [0.0000000031, 3.45966511571, 529.4785167735],
    [0.000000003, 3.70331799503, 2634.2277314714],
    [0.00000000292, 2.63594456361, 415.5524906121],
    [0.00000000279, 1.60669121578, 643.8294395771],
    [0.00000000291, 5.8313407182, 1148.2476104062],
    [0.0000000037, 5.71572992274, 531.1754378029],
    [0.00000000268, 5.39275891813, 1891.2376709388],
    [0.00000000275, 3.34108666036, 518.6452648307],
    [0.00000000269, 1.06051406954, 1585.1407420207],
    [0.00000000306, 2.5028901737, 511.5317178299],
    [0.00000000295, 1.84394223501, 547.8502123593],
    [0.00000000254, 2.98312992496, 1134.1635287565],
    [0.00000000289, 1.86070918711, 21.3406410024],
    [0.00000000265, 4.93075479744, 679.2541622292],
    [0.0000000025, 0.42860925124, 1969.2006632438],
    [0.00000000308, 2.67237933272, 2957.7331481288],
    [0.00000000313, 4.88085697819, 528.2064923863],
    [0.00000000222, 4.78828764413, 514.7131115676],
    [0.00000000221, 4.32763468981, 1677.9385755008],
    [0.00000000217, 3.46278526461, 2950.619601128],
    [0.00000000216, 0.5220766798, 2228.9701815978],
    [0.00000000214, 5.83569926578, 544.6688186216],
    [0.00000000283, 2.8870971609, 35.4247226521],
    [0.00000000272, 1.65708415457, 3060.8259223474],
    [0.00000000234, 1.68821537711, 2655.5683724738],
    [0.00000000205, 3.3618688829, 2847.5268269094],
    [0.00000000264, 3.62722625694, 2420.9286360334],
    [0.00000000191, 4.26821147044, 430.5303441391],
    [0.00000000179, 3.91470663005, 3340.6124266998],
    [0.0000000018, 0.04531671003, 387.2413149608],
    [0.00000000241, 4.03927631611, 494.2662424425],
    [0.00000000176, 4.26298906325, 672.1406152284],
    [0.00000000187, 2.72587420586, 299.1263942692],
    [0.00000000234, 1.3447482745, 173.9422195228],
    [0.00000000171, 0.85473611718, 1603.2999892854],
    [0.00000000224, 0.33130232434, 565.1156877467],
    [0.000000002, 1.27632489123, 39.3568759152],
    [0.0000000017, 4.96479470273, 1464.6394800628],
    [0.00000000211, 1.00937080256, 523.5406259403],
    [0.0000000021, 3.75793720248, 2854.6403739102],
    [0.00000000162, 5.87784787295, 3480.3105662226],
    [0.00000000163, 4.62850343495, 2015.6710861598],
    [0.00000000191, 3.3315928375, 535.8413042489],
    [0.00000000151, 1.17096741034, 1060.3451380357],
    [0.0000000016, 1.81852636004, 312.4597163935],
    [0.00000000158, 2.59595816107, 529.4303326637],
    [0.00000000158, 1.7447274873, 529.9515975255],
    [0.00000000173, 3.62399350412, 230.5645708254],
    [0.00000000142, 0.70435921398, 522.529233984],
    [0.00000000144, 5.3576312243, 107.0249274817],
    [0.00000000144, 6.13954848857, 1158.5425511447],
    [0.00000000178, 0.27566275049, 3906.9087570986],
    [0.00000000126, 5.14832919826, 2207.6295405954],
    [0.00000000126, 3.41994798109, 2.4476805548],
    [0.00000000127, 0.39825164051, 70.8494453042],
    [0.00000000123, 4.77865550523, 2524.021410252],
    [0.00000000123, 0.46184813516, 647.0108333148],
    [0.00000000144, 3.60261852727, 1058.4187223427],
    [0.00000000158, 3.76231915252, 92.0470739547],
    [0.00000000119, 4.08266911415, 1585.8915015461],
    [0.00000000125, 2.35496721797, 3163.918696566],
    [0.00000000122, 3.21027426317, 3377.217792004],
    [0.00000000121, 3.39770381916, 18.1592472647],
    [0.00000000131, 1.67926417552, 1289.9465010146],
    [0.00000000115, 2.35735471566, 1550.939859646],
    [0.00000000126, 2.40833814513, 106.2741679563],
    [0.00000000131, 1.37610474529, 1023.9572075371],
    [0.00000000121, 1.60252617273, 10.2949407385],
    [0.00000000121, 0.61420823557, 1592.2542890215],
    [0.00000000135, 3.60177675518, 124.433415221],
    [0.00000000137, 2.41724947062, 3274.1250177854],
    [0.00000000129, 0.09702914345, 2332.0629558164],
    [0.00000000093, 4.88949890397, 1098.7388061044],
    [0.00000000106, 5.18592950792, 2281.2304965106],
    [0.00000000114, 2.96523316419, 1166.4068576709],
    [0.00000000092, 1.65166124027, 860.3099287528],
    [0.00000000102, 3.64093193142, 3171.0322435668],
    [0.00000000103, 1.63066232967, 1894.4190646765],
    [0.0000000008, 0.38766601876, 4694.0029547076],
    [0.00000000074, 3.86865238736, 3067.9394693482],
    [0.00000000095, 1.66362447044, 1151.4290041439],
];

const B1: &[Term] = &[
    [0.00177351787, 5.70166488486, 529.6909650946],
    [0.00003230171, 5.7794161934, 1059.3819301892],
    [0.00003081364, 5.47464296527, 522.5774180938],
    [0.00002211914, 4.73477480209, 536.8045120954],
    [0.00001694232, PI, 0.0],
    [0.00000346445, 4.74595174109, 1052.2683831884],
    [0.00000234264, 5.18856099929, 1066.49547719],
    [0.00000196154, 6.18554286642, 7.1135470008],
    [0.00000150468, 3.92721226087, 1589.0728952838],
    [0.00000114128, 3.4389727183, 632.7837393132],
    [0.00000096667, 2.9142630409, 949.1756089698],
    [0.00000076599, 2.50522188662, 103.0927742186],
    [0.00000081671, 5.07666097497, 1162.4747044078],
    [0.00000076572, 0.61288981445, 419.4846438752],
    [0.00000073875, 5.49958292155, 515.463871093],
    [0.00000049915, 3.94799616572, 735.8765135318],
    [0.00000060544, 5.44740084359, 213.299095438],
    [0.00000036561, 4.69828392839, 543.9180590962],
    [0.00000046032, 0.53850360901, 110.2063212194],
    [0.00000045123, 1.89516645239, 846.0828347512],
    [0.00000036019, 6.10952578764, 316.3918696566],
    [0.00000031975, 4.92452714629, 1581.959348283],
    [0.00000021015, 5.6295773141, 1596.1864422846],
    [0.00000023156, 5.84829490183, 323.5054166574],
    [0.00000024719, 3.94107395247, 2118.7638603784],
    [0.00000017274, 5.65310656429, 533.6231183577],
    [0.00000016521, 5.89840100621, 526.5095713569],
    [0.00000016698, 5.66663034948, 1265.5674786264],
    [0.00000015815, 4.43314786393, 1045.1548361876],
    [0.00000013398, 4.30179033605, 532.8723588323],
    [0.00000011744, 1.80990486955, 956.2891559706],
    [0.00000011925, 4.30094564154, 525.7588118315],
    [0.00000009514, 2.02589667166, 206.1855484372],
    [0.00000010542, 6.15533910933, 14.2270940016],
    [0.00000008414, 3.9291045034, 1478.8665740644],
    [0.00000008099, 4.20152809071, 1169.5882514086],
    [0.00000007712, 2.99160389601, 942.062061969],
    [0.00000008825, 1.55897920307, 426.598190876],
    [0.00000008884, 4.87430124264, 1155.361157407],
    [0.00000007793, 3.84684930196, 625.6701923124],
    [0.00000005646, 3.40915964493, 639.897286314],
    [0.00000004615, 0.83374662294, 117.3198682202],
    [0.0000000402, 5.50502127885, 433.7117378768],
    [0.00000003704, 0.90226777963, 95.9792272178],
    [0.00000003859, 0.69640284662, 853.196381752],
    [0.00000003091, 5.09115860882, 1073.6090241908],
    [0.0000000336, 5.10133284081, 1692.1656695024],
    [0.00000002892, 4.9041891666, 220.4126424388],
    [0.00000002772, 5.09066125724, 2111.6503133776],
    [0.00000002425, 3.74438653232, 742.9900605326],
    [0.00000002558, 5.46955948791, 1795.258443721],
    [0.00000002466, 4.2227835543, 2648.454825473],
    [0.00000001968, 0.57192251841, 309.2783226558],
    [0.00000001794, 4.60765219417, 1272.6810256272],
    [0.00000001822, 1.98842964323, 1375.7737998458],
    [0.00000001703, 6.12660562937, 2125.8774073792],
    [0.00000002011, 5.00936865256, 412.3710968744],
    [0.00000001645, 0.08830372958, 1063.3140834523],
    [0.00000001875, 5.81006158403, 330.6189636582],
    [0.00000001741, 4.58650290431, 1574.8458012822],
    [0.00000001529, 5.81660291389, 1258.4539316256],
    [0.00000001916, 0.85150399517, 1368.660252845],
    [0.00000001614, 4.36839107221, 728.762966531],
    [0.0000000151, 2.79374165455, 1485.9801210652],
    [0.00000001333, 4.84260898693, 1062.5633239269],
    [0.00000001359, 5.16511980864, 838.9692877504],
    [0.00000001165, 5.66275740881, 508.3503240922],
    [0.00000001092, 4.68797557406, 1699.2792165032],
    [0.00000001438, 5.78105679279, 1056.2005364515],
    [0.00000001083, 3.99886917926, 1471.7530270636],
    [0.00000001002, 4.79949608524, 1055.4497769261],
    [0.00000000749, 6.1440086203, 519.3960243561],
    [0.00000000657, 5.63765568876, 1898.3512179396],
    [0.00000000702, 5.04126574492, 1685.0521225016],
    [0.00000000607, 3.15707515246, 618.5566453116],
    [0.00000000587, 1.37658820775, 199.0720014364],
    [0.00000000552, 4.8065772945, 551.031606097],
    [0.00000000494, 4.43417307482, 539.9859058331],
    [0.00000000517, 0.05161181997, 3.1813937377],
    [0.00000000469, 3.81715950042, 2008.557539159],
    [0.00000000415, 1.34693184108, 1382.8873468466],
    [0.00000000382, 4.86764073919, 227.5261894396],
    [0.00000000473, 1.72405831407, 532.1386456494],
    [0.00000000458, 4.44604993015, 1038.0412891868],
    [0.00000000376, 2.23190744786, 529.6427809848],
    [0.00000000451, 3.75869883836, 984.6003316219],
    [0.00000000376, 5.42971857629, 529.7391492044],
    [0.00000000389, 1.92698506631, 525.0250986486],
    [0.00000000364, 3.35456685746, 2221.856634597],
    [0.00000000476, 5.93625415892, 527.2432845398],
    [0.00000000383, 6.12255867339, 149.5631971346],
    [0.00000000301, 4.09378934049, 440.8252848776],
    [0.0000000031, 5.58150418981, 2428.0421830342],
    [0.00000000282, 4.85996662231, 1788.1448967202],
    [0.00000000298, 5.09589374634, 528.7277572481],
    [0.0000000034, 4.5653707022, 750.1036075334],
    [0.00000000272, 2.3534696034, 534.3568315406],
    [0.0000000036, 3.91050161665, 74.7815985673],
    [0.00000000299, 1.43093538841, 909.8187330546],
    [0.00000000297, 2.56584512211, 530.6541729411],
    [0.00000000235, 4.81644489422, 535.107591066],
    [0.00000000306, 0.68420442848, 380.12776796],
    [0.00000000236, 4.63162956792, 526.7702037878],
    [0.0000000027, 0.18549916939, 21.3406410024],
    [0.00000000288, 4.26655874393, 1802.3719907218],
    [0.00000000196, 5.35950443033, 2214.7430875962],
    [0.0000000019, 4.5461519326, 2104.5367663768],
    [0.00000000193, 4.35426216497, 511.5317178299],
    [0.00000000178, 4.51895208036, 3178.1457905676],
    [0.00000000194, 0.57050756837, 1361.5467058442],
    [0.000000002, 1.48040474749, 302.164775655],
    [0.00000000168, 5.40141749419, 524.2743391232],
    [0.00000000152, 0.68077486546, 1905.4647649404],
    [0.00000000149, 1.06678990744, 831.8557407496],
    [0.00000000182, 3.62401009613, 38.1330356378],
    [0.00000000176, 5.64331384323, 963.4027029714],
    [0.00000000184, 4.48850356629, 604.4725636619],
    [0.00000000133, 5.45026366125, 2641.3412784722],
    [0.00000000143, 2.21577268292, 1439.5096981492],
    [0.0000000013, 4.88155705493, 2531.1349572528],
    [0.00000000129, 6.15206333598, 547.8502123593],
    [0.00000000133, 5.43193972385, 1603.2999892854],
    [0.00000000133, 3.49297492409, 529.1697002328],
    [0.00000000132, 3.98820790955, 530.2122299564],
    [0.00000000118, 5.38352943814, 1891.2376709388],
    [0.00000000133, 5.65694269884, 76.2660712756],
    [0.00000000145, 2.94976686191, 454.9093665273],
    [0.00000000115, 3.29206553804, 3.9321532631],
    [0.00000000102, 4.48856749557, 2001.4439921582],
    [0.00000000106, 6.08434275898, 10.2949407385],
    [0.00000000093, 5.8473777184, 2324.9494088156],
    [0.00000000101, 0.15815934254, 2655.5683724738],
    [0.00000000115, 3.59221021604, 2015.6710861598],
    [0.00000000103, 4.70399583323, 305.3461693927],
    [0.00000000084, 0.44180206332, 1593.0050485469],
    [0.00000000092, 2.44863388631, 490.3340891794],
    [0.00000000087, 6.23817512863, 6283.0758499914],
    [0.00000000095, 3.30154605532, 2317.8358618148],
    [0.00000000072, 1.90578907085, 528.9402055692],
    [0.00000000072, 5.57619428876, 530.44172462],
    [0.00000000078, 5.97323507836, 1585.8915015461],
];

const B2: &[Term] = &[
    [0.00008094051, 1.46322843658, 529.6909650946],
    [0.00000742415, 0.95691639003, 522.5774180938],
    [0.00000813244, PI, 0.0],
    [0.00000398951, 2.89888666447, 536.8045120954],
    [0.00000342226, 1.44683789727, 1059.3819301892],
    [0.00000073948, 0.40724675866, 1052.2683831884],
    [0.00000046151, 3.48036895772, 1066.49547719],
    [0.00000029314, 0.99088831805, 515.463871093],
    [0.00000029717, 1.92504171329, 1589.0728952838],
    [0.00000022753, 4.27124052435, 7.1135470008],
    [0.00000013916, 2.92242387338, 543.9180590962],
    [0.00000012067, 5.22168932482, 632.7837393132],
    [0.00000010703, 4.88024222475, 949.1756089698],
    [0.00000006078, 6.21089108431, 1045.1548361876],
    [0.00000005935, 0.52977760072, 1581.959348283],
    [0.00000005037, 1.43444929374, 526.5095713569],
    [0.00000004564, 0.91811732585, 1162.4747044078],
    [0.00000004547, 4.01953745202, 1596.1864422846],
    [0.00000005098, 6.03169795231, 735.8765135318],
    [0.00000003593, 4.54080164408, 110.2063212194],
    [0.00000003443, 1.38618954572, 533.6231183577],
    [0.00000003277, 4.39650286553, 14.2270940016],
    [0.00000003407, 0.42275631534, 419.4846438752],
    [0.00000002904, 2.06041641723, 316.3918696566],
    [0.00000002541, 3.98323842017, 323.5054166574],
    [0.00000003113, 2.48079280193, 2118.7638603784],
    [0.00000003061, 2.39880866911, 532.8723588323],
    [0.00000002155, 4.7799063714, 942.062061969],
    [0.00000002143, 3.88727338786, 426.598190876],
    [0.00000002252, 0.3719643412, 1155.361157407],
    [0.00000002019, 3.89985000464, 846.0828347512],
    [0.00000001857, 1.19658907851, 103.0927742186],
    [0.00000001683, 1.42264195434, 1265.5674786264],
    [0.00000002313, 0.87671613055, 213.299095438],
    [0.00000001443, 2.38565505909, 1169.5882514086],
    [0.00000001823, 5.80106463776, 625.6701923124],
    [0.00000001728, 2.24114678267, 525.7588118315],
    [0.00000001198, 0.03252059731, 956.2891559706],
    [0.00000001138, 3.46420904745, 1073.6090241908],
    [0.00000001086, 5.352791467, 117.3198682202],
    [0.0000000084, 2.89946334223, 95.9792272178],
    [0.00000000746, 5.53017890231, 1478.8665740644],
    [0.00000000944, 4.055870535, 206.1855484372],
    [0.00000000758, 3.74770617289, 433.7117378768],
    [0.00000000673, 1.26396626349, 508.3503240922],
    [0.00000000889, 6.07878453176, 728.762966531],
    [0.000000006, 1.82954494089, 639.897286314],
    [0.00000000589, 1.23625943417, 1258.4539316256],
    [0.00000000619, 0.67923057477, 838.9692877504],
    [0.00000000566, 5.36336098734, 742.9900605326],
    [0.00000000648, 5.32990375008, 853.196381752],
    [0.00000000553, 3.15511946637, 220.4126424388],
    [0.00000000432, 1.03719283016, 1692.1656695024],
    [0.00000000435, 1.65056479007, 519.3960243561],
    [0.0000000043, 1.41830384501, 412.3710968744],
    [0.00000000431, 2.20986254651, 1368.660252845],
    [0.00000000415, 4.35372561905, 330.6189636582],
    [0.00000000438, 0.1655227729, 1574.8458012822],
    [0.00000000312, 4.50639455819, 2125.8774073792],
    [0.0000000028, 3.01441283033, 551.031606097],
    [0.00000000309, 0.67399908949, 2111.6503133776],
    [0.00000000301, 3.06868080871, 1062.5633239269],
    [0.00000000236, 1.946968422, 1485.9801210652],
    [0.00000000235, 3.41850395941, 199.0720014364],
    [0.00000000246, 2.61803442505, 309.2783226558],
    [0.00000000238, 2.56643737684, 539.9859058331],
    [0.00000000248, 2.96997778167, 2648.454825473],
    [0.00000000209, 5.82481690851, 1471.7530270636],
    [0.00000000205, 1.20202002469, 1056.2005364515],
    [0.00000000188, 0.97113663101, 1685.0521225016],
    [0.00000000137, 2.91203499563, 1699.2792165032],
    [0.00000000131, 1.79274504072, 1063.3140834523],
    [0.00000000161, 1.05926568614, 1795.258443721],
    [0.00000000112, 2.62660288825, 440.8252848776],
    [0.0000000011, 3.56263668146, 227.5261894396],
    [0.00000000114, 6.13907482464, 1038.0412891868],
    [0.00000000103, 4.6428710104, 3.1813937377],
    [0.00000000123, 4.81268110532, 21.3406410024],
    [0.00000000102, 4.2760382797, 1375.7737998458],
    [0.00000000089, 1.22926014128, 1898.3512179396],
    [0.0000000008, 0.62129648755, 831.8557407496],
];

const B3: &[Term] = &[
    [0.00000251624, 3.38087923084, 529.6909650946],
    [0.00000121738, 2.733118372, 522.5774180938],
    [0.00000048694, 1.03689996685, 536.8045120954],
    [0.00000010988, 2.31463561347, 1052.2683831884],
    [0.00000008067, 2.76729757621, 515.463871093],
    [0.00000006205, 1.7811582737, 1066.49547719],
    [0.00000007287, 4.25268318975, 1059.3819301892],
    [0.00000003627, 1.13028917221, 543.9180590962],
    [0.00000002798, PI, 0.0],
    [0.00000001898, 2.28934054087, 7.1135470008],
    [0.00000001643, 1.77507208483, 1045.1548361876],
    [0.00000000945, 0.45261136388, 632.7837393132],
    [0.00000000758, 0.30577920142, 949.1756089698],
    [0.00000000731, 2.63748223583, 14.2270940016],
    [0.00000000876, 0.32927768725, 1589.0728952838],
    [0.00000000678, 2.36909615348, 1581.959348283],
    [0.00000000623, 2.480562136, 1596.1864422846],
    [0.00000000736, 1.52532370632, 735.8765135318],
    [0.00000000499, 3.67985494258, 419.4846438752],
    [0.00000000454, 0.26977404624, 942.062061969],
    [0.00000000453, 3.18232334886, 526.5095713569],
    [0.00000000409, 2.88147337106, 110.2063212194],
    [0.00000000347, 5.7624428587, 103.0927742186],
    [0.0000000031, 2.98017326384, 508.3503240922],
    [0.00000000321, 4.40642025933, 532.8723588323],
    [0.000000003, 1.66936571536, 625.6701923124],
    [0.00000000295, 1.75924202728, 1073.6090241908],
    [0.00000000282, 3.11087801399, 533.6231183577],
    [0.00000000263, 0.55255030187, 426.598190876],
    [0.00000000208, 2.17540496886, 1155.361157407],
    [0.00000000183, 4.34670868038, 525.7588118315],
    [0.0000000018, 6.07777744541, 639.897286314],
    [0.00000000159, 2.60843864402, 1162.4747044078],
    [0.00000000117, 4.70141431381, 95.9792272178],
    [0.00000000107, 5.48942805114, 433.7117378768],
    [0.00000000105, 3.75192101775, 316.3918696566],
    [0.0000000013, 1.37897716939, 323.5054166574],
    [0.00000000094, 3.05797832024, 1265.5674786264],
    [0.00000000114, 3.75170981478, 117.3198682202],
    [0.00000000095, 0.54905691533, 1169.5882514086],
    [0.00000000088, 3.26874502411, 213.299095438],
    [0.00000000098, 2.00704668688, 1574.8458012822],
];

const B4: &[Term] = &[
    [0.0000001505, 4.52956999637, 522.5774180938],
    [0.0000000537, 4.47427159142, 529.6909650946],
    [0.00000004456, 5.43908581047, 536.8045120954],
    [0.00000003422, 0.0, 0.0],
    [0.00000001833, 4.51807036227, 515.463871093],
    [0.00000001322, 4.20117611581, 1052.2683831884],
    [0.00000000755, 5.59451554966, 543.9180590962],
    [0.00000000512, 0.05803177475, 1066.49547719],
    [0.00000000282, 3.66807771223, 1059.3819301892],
    [0.00000000147, 3.56490986181, 1045.1548361876],
    [0.00000000142, 5.69936472988, 7.1135470008],
    [0.00000000112, 1.16718383135, 14.2270940016],
];

const B5: &[Term] = &[
    [0.00000001445, 0.09198554072, 522.5774180938],
    [0.00000000368, 0.00874408003, 515.463871093],
    [0.00000000304, 3.27902945138, 536.8045120954],
    [0.00000000129, 0.33959775247, 529.6909650946],
    [0.00000000095, 1.29305954542, 543.9180590962],
];

const R0: &[Term] = &[
    [5.20887429471, 0.0, 0.0],
    [0.2520932702, 3.49108640015, 529.6909650946],
    [0.00610599902, 3.84115365602, 1059.3819301892],
    [0.00282029465, 2.57419879933, 632.7837393132],
    [0.00187647391, 2.07590380082, 522.5774180938],
    [0.00086792941, 0.71001090609, 419.4846438752],
    [0.00072062869, 0.21465694745, 536.8045120954],
    [0.00065517227, 5.97995850843, 316.3918696566],
    [0.0002913462, 1.6775924371, 103.0927742186],
    [0.00030135275, 2.16132058449, 949.1756089698],
    [0.00023453209, 3.54023147303, 735.8765135318],
    [0.0002228371, 4.19362773546, 1589.0728952838],
    [0.0002394734, 0.27457854894, 7.1135470008],
    [0.000130326, 2.96043055741, 1162.4747044078],
    [0.00009703346, 1.90669572402, 206.1855484372],
    [0.00012749004, 2.71550102862, 1052.2683831884],
    [0.00009161431, 4.41352618935, 213.299095438],
    [0.00007894539, 2.47907551404, 426.598190876],
    [0.00007057978, 2.18184753111, 1265.5674786264],
    [0.00006137755, 6.26417542514, 846.0828347512],
    [0.00005477093, 5.65729325169, 639.897286314],
    [0.00003502519, 0.56531297394, 1066.49547719],
    [0.0000413689, 2.72219979684, 625.6701923124],
    [0.00004170012, 2.01605033912, 515.463871093],
    [0.00002499966, 4.55182055941, 838.9692877504],
    [0.00002616955, 2.00993967129, 1581.959348283],
    [0.00001911876, 0.85621927419, 412.3710968744],
    [0.00002127644, 6.1275146175, 742.9900605326],
    [0.00001610549, 3.08867789275, 1368.660252845],
    [0.00001479484, 2.68026191372, 1478.8665740644],
    [0.00001230708, 1.89042979701, 323.5054166574],
    [0.0000121681, 1.80171561024, 110.2063212194],
    [0.00000961072, 4.54876989805, 2118.7638603784],
    [0.00000885708, 4.14785948471, 533.6231183577],
    [0.000007767, 3.6769695469, 728.762966531],
    [0.00000998579, 2.8720894011, 309.2783226558],
    [0.00001014959, 1.38673237666, 454.9093665273],
    [0.00000727162, 3.98824686402, 1155.361157407],
    [0.00000655289, 2.79065604219, 1685.0521225016],
    [0.00000821465, 1.59342534396, 1898.3512179396],
    [0.00000620798, 4.82284338962, 956.2891559706],
    [0.00000653981, 3.38150775269, 1692.1656695024],
    [0.00000812036, 5.94091899141, 909.8187330546],
    [0.0000056212, 0.08095987241, 543.9180590962],
    [0.00000542221, 0.28360266386, 525.7588118315],
    [0.00000457859, 0.1272269451, 1375.7737998458],
    [0.00000614784, 2.27624915604, 942.062061969],
    [0.00000435805, 2.60272129748, 95.9792272178],
    [0.00000496066, 5.53005947761, 380.12776796],
    [0.00000469965, 2.81896276101, 1795.258443721],
    [0.00000445003, 0.14623567024, 14.2270940016],
    [0.00000290869, 3.89339143564, 1471.7530270636],
    [0.00000276627, 2.52238450687, 2001.4439921582],
    [0.00000275084, 2.98863518924, 526.5095713569],
    [0.00000293875, 2.04938438861, 199.0720014364],
    [0.00000290985, 6.03131226226, 1169.5882514086],
    [0.00000338342, 2.79873192583, 1045.1548361876],
    [0.00000257482, 6.13395478303, 532.8723588323],
    [0.00000319013, 1.34803130803, 2214.7430875962],
    [0.00000309352, 5.36855804945, 1272.6810256272],
    [0.00000345804, 1.56404293688, 491.5579294568],
    [0.00000303364, 1.15407454372, 5753.3848848968],
    [0.00000192325, 0.91996333387, 1596.1864422846],
    [0.00000215398, 2.63572815848, 2111.6503133776],
    [0.00000200738, 2.37259566683, 1258.4539316256],
    [0.00000239036, 3.57397189838, 835.0371344873],
    [0.00000197073, 5.92859096863, 453.424893819],
    [0.0000013944, 3.63960322318, 1788.1448967202],
    [0.00000191373, 6.2825131187, 983.1158589136],
    [0.00000176551, 2.57669991654, 9683.5945811164],
    [0.00000123567, 2.26158186345, 2317.8358618148],
    [0.00000128176, 4.6658590767, 831.8557407496],
    [0.0000011243, 0.85604150812, 433.7117378768],
    [0.00000128817, 1.10567106595, 2531.1349572528],
    [0.0000009939, 4.50312054049, 518.6452648307],
    [0.0000009387, 2.7255387999, 853.196381752],
    [0.00000106481, 5.8146222229, 220.4126424388],
    [0.00000120188, 2.95156363556, 3.9321532631],
    [0.00000104002, 2.22221906187, 74.7815985673],
    [0.00000081655, 3.23481337678, 1361.5467058442],
    [0.00000112513, 4.86216964016, 528.2064923863],
    [0.00000079539, 0.8854224683, 430.5303441391],
    [0.00000085801, 2.11458386763, 1574.8458012822],
    [0.00000085685, 2.33823884827, 2428.0421830342],
    [0.00000068311, 3.35727048905, 2104.5367663768],
    [0.0000006957, 3.04164697156, 302.164775655],
    [0.00000069775, 3.22402404312, 305.3461693927],
    [0.0000006957, 0.20494979941, 532.1386456494],
    [0.00000056991, 2.00204191909, 2634.2277314714],
    [0.00000077062, 2.09816000231, 508.3503240922],
    [0.00000056716, 3.91743976711, 2221.856634597],
    [0.00000058325, 5.72360355252, 628.8515860501],
    [0.00000052485, 4.02485010492, 527.2432845398],
    [0.00000063645, 1.09973563964, 1364.7280995819],
    [0.00000053607, 0.87425992614, 2847.5268269094],
    [0.00000059598, 0.95822471775, 494.2662424425],
    [0.0000005796, 3.45779497978, 2008.557539159],
    [0.00000041512, 3.51955526735, 529.7391492044],
    [0.00000044666, 1.62313786651, 984.6003316219],
    [0.00000044883, 4.90091959557, 2648.454825473],
    [0.00000053206, 1.19800364308, 760.25553592],
    [0.00000044393, 4.42623747662, 1063.3140834523],
    [0.00000037566, 2.93021095213, 1677.9385755008],
    [0.00000041516, 0.32174409278, 529.6427809848],
    [0.00000042855, 0.03093594081, 1439.5096981492],
    [0.00000045963, 2.54342106514, 636.7158925763],
    [0.00000040181, 4.39381642864, 1148.2476104062],
    [0.0000003877, 4.31675565025, 149.5631971346],
    [0.00000040348, 2.10140891053, 2744.4340526908],
    [0.00000048851, 5.60297777544, 2810.9214616052],
    [0.00000037085, 5.07828164301, 1905.4647649404],
    [0.00000043875, 1.24536971083, 621.7380390493],
    [0.00000034005, 3.09360167248, 2420.9286360334],
    [0.00000036782, 0.84232174637, 530.6541729411],
    [0.00000031139, 5.35811251334, 1485.9801210652],
    [0.00000039295, 4.70800489067, 569.0478410098],
    [0.000000397, 2.46163878814, 355.7487455718],
    [0.00000031527, 6.19284070863, 3.1813937377],
    [0.00000028399, 2.48456666067, 519.3960243561],
    [0.00000032432, 2.73281750275, 604.4725636619],
    [0.00000027119, 3.92341697086, 2324.9494088156],
    [0.00000026753, 1.74975198417, 2950.619601128],
    [0.00000028986, 1.83535862643, 1891.2376709388],
    [0.00000026493, 0.60380196895, 1055.4497769261],
    [0.00000033525, 0.76068430639, 643.8294395771],
    [0.00000026568, 1.03594610835, 405.2575498736],
    [0.00000025534, 3.46320665375, 458.8415197904],
    [0.00000024421, 0.8818183693, 423.4167971383],
    [0.00000032949, 3.18597137308, 528.7277572481],
    [0.00000022456, 0.43129919683, 1073.6090241908],
    [0.00000021599, 1.41820425091, 540.7366653585],
    [0.00000025673, 0.5235819476, 511.5317178299],
    [0.00000021115, 3.08023522766, 629.6023455755],
    [0.00000022713, 0.65234613144, 3163.918696566],
    [0.00000019189, 5.16589014963, 635.9651330509],
    [0.00000026042, 1.33629471285, 330.6189636582],
    [0.00000018263, 3.59973446951, 746.9222137957],
    [0.0000001821, 2.66819439927, 1994.3304451574],
    [0.00000019724, 4.13552133321, 1464.6394800628],
    [0.0000001948, 1.85656428109, 3060.8259223474],
    [0.00000023927, 4.99826361784, 1289.9465010146],
    [0.00000021886, 5.91718683551, 1802.3719907218],
    [0.00000017482, 2.82161612542, 2737.32050569],
    [0.00000016608, 5.67394889755, 408.4389436113],
    [0.00000022892, 5.26731352093, 672.1406152284],
    [0.00000018349, 1.89869734949, 1021.2488945514],
    [0.00000019123, 3.65882402977, 415.5524906121],
    [0.00000015735, 3.34772676006, 1056.2005364515],
    [0.00000016373, 0.18094878053, 1699.2792165032],
    [0.00000018899, 3.69120638874, 88.865680217],
    [0.00000018655, 1.97327300097, 38.1330356378],
    [0.00000015542, 3.8220488101, 721.6494195302],
    [0.0000001678, 1.90976657921, 217.2312487011],
    [0.00000015313, 1.05907174619, 114.1384744825],
    [0.0000001519, 1.32317039042, 117.3198682202],
    [0.0000001508, 3.74469077216, 2641.3412784722],
    [0.00000019836, 2.73184571324, 39.3568759152],
    [0.00000014708, 1.67270454473, 529.1697002328],
    [0.00000014036, 3.54305270022, 142.4496501338],
    [0.00000012931, 1.48829749349, 3267.0114707846],
    [0.00000014924, 1.3254608594, 490.3340891794],
    [0.00000014753, 4.64530618027, 6283.0758499914],
    [0.00000014672, 0.80451954754, 5223.6939198022],
    [0.00000012085, 3.67072510553, 750.1036075334],
    [0.00000011954, 2.97127390765, 505.3119427064],
    [0.0000001465, 2.1679293025, 530.2122299564],
    [0.00000011869, 1.66551754962, 2207.6295405954],
    [0.00000012273, 0.20690014405, 1062.5633239269],
    [0.0000001146, 1.11906683214, 561.934294009],
    [0.00000011083, 3.22049096074, 535.107591066],
    [0.00000011567, 5.22625628971, 524.0618908021],
    [0.00000011161, 3.82945634036, 76.2660712756],
    [0.00000010918, 1.27796962818, 2125.8774073792],
    [0.00000012685, 3.96848605476, 2538.2485042536],
    [0.0000001123, 3.23092119889, 422.6660376129],
    [0.00000012645, 0.7367042858, 908.3342603463],
    [0.0000001133, 5.56127247007, 531.1754378029],
    [0.00000009509, 5.00507284204, 597.3590166611],
    [0.00000010291, 3.84159025239, 1781.0313497194],
    [0.00000010762, 4.91380719453, 525.0250986486],
    [0.00000011786, 5.11863653538, 685.4739373527],
    [0.0000001198, 1.72470898635, 911.3032057629],
    [0.00000008937, 2.40338241992, 2310.722314814],
    [0.00000009253, 2.57670338148, 3053.7123753466],
    [0.00000009488, 2.95089828501, 1382.8873468466],
    [0.00000009889, 0.43758517388, 3480.3105662226],
    [0.00000008781, 3.66562388594, 739.8086667949],
    [0.00000008664, 2.70398612383, 526.7702037878],
    [0.00000009505, 1.61249870019, 3377.217792004],
    [0.0000001154, 1.59520481029, 1474.6737883704],
    [0.00000009533, 0.35468711552, 1512.8068240082],
    [0.0000000998, 4.80984684596, 558.0021407459],
    [0.00000009014, 1.21458362718, 416.3032501375],
    [0.00000007969, 0.08480602718, 528.9402055692],
    [0.00000008668, 5.29060005706, 945.2434557067],
    [0.00000007851, 1.46751861875, 963.4027029714],
    [0.00000008611, 1.13232641062, 532.6117264014],
    [0.00000007838, 6.26933498027, 647.0108333148],
    [0.00000007581, 2.90608705954, 533.8837507886],
    [0.00000008583, 6.06634530166, 10213.285546211],
    [0.00000010198, 2.48743123636, 1819.6374661092],
    [0.00000008536, 2.2270070179, 9153.9036160218],
    [0.00000009759, 6.15593336218, 593.426863398],
    [0.00000007968, 3.75535355212, 530.44172462],
    [0.00000007142, 3.58836120327, 2957.7331481288],
    [0.00000007122, 0.11970048938, 224.3447957019],
    [0.00000008731, 0.7530291397, 960.2213092337],
    [0.00000007063, 2.1679303769, 724.8308132679],
    [0.00000007263, 2.29499675875, 520.129737539],
    [0.00000006418, 1.25058991868, 3583.4033404412],
    [0.0000000827, 1.24806288317, 495.7507151508],
    [0.00000006483, 4.7456777264, 202.2533951741],
    [0.00000007197, 3.84169279666, 618.5566453116],
    [0.00000008146, 0.73147060302, 230.5645708254],
    [0.00000006165, 5.50124418381, 11.0457002639],
    [0.00000007946, 2.07754951174, 953.1077622329],
    [0.00000007675, 0.92400307662, 525.4981794006],
    [0.0000000621, 1.45641362115, 483.2205421786],
    [0.00000007359, 0.31355650764, 378.6432952517],
    [0.00000006707, 2.92071167098, 1038.0412891868],
    [0.00000007143, 0.18218134889, 731.9443602687],
    [0.00000007309, 6.27084533477, 21.3406410024],
    [0.00000006135, 2.67651237303, 312.4597163935],
    [0.00000005558, 3.83419160288, 534.3568315406],
    [0.00000005344, 5.25294750019, 1048.3362299253],
    [0.00000007504, 0.74281415471, 457.617679513],
    [0.00000005335, 6.23059924424, 551.031606097],
    [0.00000005613, 1.51210605952, 524.2743391232],
    [0.00000005284, 2.18579185671, 280.9671470045],
    [0.00000005475, 5.95864753605, 539.9859058331],
    [0.00000005056, 0.37387972537, 529.5309064002],
    [0.00000006202, 5.53813122743, 2.4476805548],
    [0.0000000549, 5.97692444199, 227.5261894396],
    [0.00000006266, 0.76632858238, 938.1299087059],
    [0.0000000575, 2.13496323512, 191.9584544356],
    [0.00000005218, 4.69335266854, 560.7104537316],
    [0.0000000548, 5.21157595558, 1057.8974574809],
    [0.00000005738, 0.34249718209, 535.9107402181],
    [0.00000004816, 1.51326236835, 2524.021410252],
    [0.00000005056, 3.46671669992, 529.851023789],
    [0.0000000471, 2.2781383055, 3370.1042450032],
    [0.00000005228, 3.61776977584, 2097.423219376],
    [0.00000004878, 1.39829798223, 3693.6096616606],
    [0.00000005727, 4.80120381106, 598.8434893694],
    [0.00000005707, 3.94177950323, 2854.6403739102],
    [0.00000004988, 4.87244187719, 1.4844727083],
    [0.00000005424, 3.53268613904, 456.3938392356],
    [0.00000004288, 4.84438067847, 70.8494453042],
    [0.00000005944, 3.79180483544, 25558.2121764796],
    [0.00000004195, 2.09136830994, 2627.1141844706],
    [0.00000004582, 5.61707254513, 2435.155730035],
    [0.00000004268, 6.20250525415, 775.233389447],
    [0.00000004521, 0.20049967962, 92.0470739547],
    [0.00000005405, 4.66492781581, 833.552661779],
    [0.00000005607, 3.30226645638, 535.3200393871],
    [0.00000004171, 3.14873010832, 944.9828232758],
    [0.00000004108, 5.84489743779, 440.8252848776],
    [0.00000004367, 4.68363584557, 327.4375699205],
    [0.00000004033, 3.30883782817, 3274.1250177854],
    [0.00000004292, 0.20604269202, 3796.7024358792],
    [0.0000000427, 0.98941708997, 387.2413149608],
    [0.00000004259, 3.21120589971, 696.5196376166],
    [0.00000004673, 1.96606729969, 107.0249274817],
    [0.00000004031, 4.62854606236, 2751.5475996916],
    [0.00000005115, 2.66416451377, 1215.1649024473],
    [0.00000004181, 4.74527698816, 988.532484885],
    [0.00000004374, 1.50010561403, 1894.4190646765],
    [0.00000003803, 3.59911687954, 437.6438911399],
    [0.00000003761, 3.96903199782, 732.6951197941],
    [0.0000000362, 1.57847427805, 381.6122406683],
    [0.0000000349, 0.63097592112, 529.9034134157],
    [0.00000004019, 2.5766416572, 916.9322800554],
    [0.00000004133, 4.78417930217, 824.7421937488],
    [0.00000004411, 3.13179382423, 630.3360587584],
    [0.00000004099, 3.63702212253, 810.6581120991],
    [0.00000003704, 6.17243801274, 537.7677199419],
    [0.00000004124, 2.14248285449, 210.1177017003],
    [0.0000000349, 3.20962050417, 529.4785167735],
    [0.00000003281, 1.53106243317, 547.8502123593],
    [0.00000003554, 6.03787799174, 739.0579072695],
    [0.00000004101, 6.00406226999, 902.7051860538],
    [0.00000003267, 3.49354065789, 1166.4068576709],
    [0.00000003286, 2.5596687053, 945.9942152321],
    [0.00000004041, 4.78735413707, 850.0149880143],
    [0.00000004304, 0.11406117717, 1744.8558675419],
    [0.00000004043, 5.204170936, 635.231419868],
    [0.00000003115, 4.61986265585, 952.3570027075],
    [0.00000003016, 0.95126220905, 3899.7952100978],
    [0.00000003017, 2.59699501992, 632.831923423],
    [0.00000003219, 1.83594791142, 18.1592472647],
    [0.00000003203, 6.12597544496, 10.2949407385],
    [0.0000000322, 6.1421342314, 1158.5425511447],
    [0.00000003, 5.69509924353, 632.7355552034],
    [0.00000003226, 5.59910267099, 608.404716925],
    [0.00000003118, 5.64998934505, 99.1606209555],
    [0.00000003745, 2.08111521615, 282.4516197128],
    [0.00000002837, 4.6017559422, 245.5424243524],
    [0.00000003093, 6.02049413961, 633.7469471597],
    [0.0000000312, 2.29047945342, 631.8205314667],
    [0.00000002662, 3.69016679729, 885.4397106664],
    [0.0000000315, 1.79784999553, 521.6142102473],
    [0.00000002822, 3.14927418161, 295.0512286542],
    [0.00000002615, 0.20732170653, 35.4247226521],
    [0.00000002971, 1.28795094653, 1023.9572075371],
    [0.00000002571, 2.01817133502, 1514.2912967165],
    [0.00000002592, 0.487902212, 195.1398481733],
    [0.00000003263, 2.38820607343, 836.5216071956],
    [0.00000002501, 0.21653750027, 465.9550667912],
    [0.00000002451, 5.58559489768, 544.6688186216],
    [0.00000002535, 1.44414086617, 460.5384408198],
    [0.00000002666, 3.30350145485, 2413.8150890326],
    [0.00000002412, 4.3675658031, 1056.9342496344],
    [0.00000002452, 4.53818816565, 514.7131115676],
    [0.00000003239, 1.17022488774, 177.8743727859],
    [0.00000003218, 0.60551913257, 1061.829610744],
    [0.00000002408, 0.6542352381, 523.5406259403],
    [0.00000002299, 2.1524775256, 319.5732633943],
    [0.00000002791, 2.71505085086, 610.6923387854],
    [0.00000002729, 1.77685979153, 252.6559713532],
    [0.00000002666, 3.77750458842, 3171.0322435668],
    [0.00000002303, 0.36676453766, 1969.2006632438],
    [0.00000002664, 0.09674841214, 565.1156877467],
    [0.00000002312, 2.07210502831, 3686.4961146598],
    [0.0000000268, 4.9444588805, 1593.0050485469],
    [0.00000002193, 0.55645982205, 2228.9701815978],
    [0.00000002526, 1.07528597373, 12036.4607348882],
    [0.00000002778, 1.48379350517, 447.7958195265],
    [0.00000002235, 5.95475282699, 6151.533888305],
    [0.00000002759, 4.6397615348, 462.0229135281],
    [0.00000002175, 4.5358857024, 501.3797894433],
    [0.00000002323, 5.93670041006, 611.4430983108],
    [0.00000002384, 2.81746622971, 3340.6124266998],
    [0.00000002087, 3.10716079675, 1049.0869894507],
    [0.00000001994, 2.02500860064, 1058.8606653274],
    [0.00000002199, 2.20937490997, 1269.4996318895],
    [0.00000002705, 1.97665276677, 415.2918581812],
    [0.00000002787, 1.31053438756, 1041.2226829245],
    [0.00000002003, 4.66904374443, 679.2541622292],
    [0.00000001962, 1.82999730674, 2943.5060541272],
    [0.00000002289, 2.96480800939, 69.1525242748],
    [0.00000002192, 4.47837196209, 209.3669421749],
    [0.0000000202, 0.0462136449, 4113.0943055358],
    [0.00000002082, 1.1120305917, 4010.0015313172],
    [0.00000001991, 3.20108648275, 3590.516887442],
    [0.000000019, 3.32227077969, 421.93232443],
    [0.00000002193, 2.82218305362, 292.0128472684],
    [0.00000002288, 1.94695631885, 1279.794572628],
    [0.00000001843, 5.23293634337, 14.977853527],
    [0.00000001932, 5.4668425203, 2281.2304965106],
    [0.00000002177, 2.93031976617, 429.0458714308],
    [0.00000002125, 0.06224847826, 24.3790223882],
    [0.00000002464, 5.3958107843, 1261.6353253633],
    [0.00000001938, 3.79908004671, 1059.430114299],
    [0.00000002029, 3.95461157815, 771.3012361839],
    [0.00000001841, 4.74905354737, 78.7137518304],
    [0.00000001922, 2.21862085389, 99.9113804809],
    [0.00000001836, 5.75449805175, 623.2225117576],
    [0.00000002145, 3.87052575546, 451.9404211107],
    [0.00000001782, 0.40860352236, 754.0357607965],
    [0.00000001784, 1.49468287576, 529.9515975255],
    [0.00000001842, 3.49726261337, 1354.4331588434],
    [0.00000001748, 3.48730020953, 522.6256022036],
    [0.00000001816, 1.2433471121, 417.0369633204],
    [0.00000001752, 1.15500390019, 1060.3451380357],
    [0.00000001729, 2.69831073799, 642.3449668688],
    [0.00000001985, 1.99916658759, 934.9485149682],
    [0.00000001828, 5.44095029767, 1201.831580323],
    [0.00000002158, 3.4567274859, 827.9235874865],
    [0.00000001959, 1.06033047373, 33.9402499438],
    [0.00000001751, 3.13572498964, 384.0599212231],
    [0.00000001781, 5.02895146997, 1098.7388061044],
    [0.00000002074, 3.18582065441, 1366.2125722902],
    [0.00000001757, 5.02778552877, 586.3133163972],
    [0.00000002045, 3.08816627459, 535.8413042489],
    [0.00000002273, 5.17998505813, 3178.1457905676],
    [0.00000001617, 3.16674916201, 67.6680515665],
    [0.00000001627, 6.10603469594, 432.0148168474],
    [0.0000000193, 1.63968957659, 5.4166259714],
    [0.00000001741, 0.99408274736, 1254.5217783625],
    [0.00000001607, 5.65498642076, 1165.6560981455],
    [0.00000001676, 3.06138410273, 1134.1635287565],
    [0.00000001821, 3.0518355509, 567.8240007324],
    [0.00000001677, 3.0917508493, 1251.3403846248],
    [0.00000001994, 2.52023134712, 1059.903195051],
    [0.00000002204, 6.1537669851, 563.6312150384],
    [0.00000001692, 4.19142612803, 106.2741679563],
    [0.00000001906, 5.58417395051, 32.2433289144],
    [0.00000002206, 1.75883974012, 1151.4290041439],
    [0.00000001552, 3.04262360186, 385.5443939314],
    [0.00000001508, 0.42002830727, 313.2104759189],
    [0.00000001494, 1.43672345922, 2840.4132799086],
    [0.00000001678, 2.17255433434, 306.830642101],
    [0.00000001511, 4.44377608685, 395.105621487],
    [0.00000001958, 0.05215107058, 761.7400086283],
    [0.0000000176, 1.27045286501, 1173.5204046717],
    [0.00000001463, 6.07810373103, 0.9632078465],
    [0.00000001498, 2.79408561759, 277.0349937414],
    [0.00000001636, 0.2619935149, 522.529233984],
    [0.00000001507, 0.48961801593, 4216.1870797544],
    [0.0000000153, 3.4295382755, 1159.2933106701],
    [0.00000001744, 2.39637837261, 203.0041546995],
    [0.00000001569, 2.55719070621, 4.192785694],
    [0.00000001576, 3.45039607104, 1058.4187223427],
    [0.00000001466, 2.24427539934, 1550.939859646],
    [0.00000001784, 2.34591354953, 529.4303326637],
    [0.00000001939, 4.7368542861, 3067.9394693482],
    [0.00000001938, 0.60126164334, 1059.3337460794],
    [0.00000001523, 2.98744673443, 2730.2069586892],
    [0.00000001834, 3.78099298791, 420.9691165835],
    [0.00000001372, 3.53997115825, 5.6290742925],
    [0.00000001361, 0.45533257707, 418.5214360287],
    [0.00000001833, 5.12743628215, 1578.0271950199],
    [0.00000001839, 4.2461604421, 981.6313862053],
    [0.00000001567, 3.32429870195, 532.3992780803],
    [0.0000000134, 1.9466828227, 528.4189407074],
    [0.00000001422, 1.83191577465, 4002.8879843164],
    [0.00000001745, 5.76913240451, 490.0734567485],
    [0.00000001437, 4.19470227783, 420.4478517217],
    [0.00000001419, 0.7484900533, 632.2624744514],
    [0.00000001447, 5.65611888743, 373.0142209592],
    [0.00000001578, 3.90273683089, 602.9880909536],
    [0.00000001385, 3.88479835656, 419.4364597654],
    [0.00000001352, 0.81697905853, 1585.1407420207],
    [0.00000001399, 1.24785452243, 633.305004175],
    [0.00000001297, 5.57914023189, 1276.6131788903],
    [0.00000001491, 1.66541781223, 2655.5683724738],
    [0.00000001252, 0.72155670765, 173.9422195228],
    [0.00000001658, 5.6092466285, 362.8622925726],
    [0.00000001606, 3.95301396173, 2274.5468326365],
    [0.00000001213, 4.55264289565, 366.7944458357],
    [0.00000001521, 0.55773831071, 1592.2542890215],
    [0.0000000122, 3.6302978804, 497.4476361802],
    [0.00000001215, 4.42854185903, 531.387886124],
    [0.00000001549, 5.73765962068, 320.3240229197],
    [0.0000000148, 4.29779032931, 303.8616966844],
    [0.00000001507, 2.27998567874, 758.7710632117],
    [0.00000001212, 3.38335836048, 536.8526962052],
    [0.00000001245, 4.21639959154, 4.665866446],
    [0.00000001507, 3.52136655355, 774.0095491696],
    [0.00000001481, 3.06156044618, 1585.8915015461],
    [0.00000001462, 2.30628702634, 1363.2436268736],
    [0.0000000118, 3.52708055024, 1064.7985561606],
    [0.00000001193, 5.88284733845, 1060.8664028975],
    [0.00000001398, 4.99456521692, 842.9014410135],
    [0.00000001406, 1.53799746944, 1020.025054274],
    [0.00000001367, 4.10254739443, 799.6124118352],
    [0.00000001336, 1.8938727238, 530.9629894818],
    [0.00000001238, 3.62226383331, 3487.4241132234],
    [0.00000001306, 3.39985119727, 539.2521926502],
    [0.00000001156, 0.77127511567, 1603.2999892854],
    [0.00000001482, 0.48451915093, 493.0424021651],
    [0.00000001247, 5.64344659992, 479.2883889155],
    [0.00000001195, 2.39909893341, 561.1835344836],
    [0.00000001106, 0.89453807282, 2.9207613068],
    [0.00000001227, 2.76231244946, 299.1263942692],
    [0.00000001128, 4.72319873338, 124.433415221],
    [0.00000001086, 5.66180289525, 1053.7528558967],
    [0.00000001329, 0.1666409453, 536.7563279856],
    [0.00000001082, 4.5140735935, 528.2546764961],
    [0.00000001105, 1.93890691771, 244.318584075],
    [0.00000001446, 0.65096230619, 1091.6252591036],
    [0.00000001071, 4.67974963103, 521.8266585684],
    [0.00000001413, 4.72936311016, 1141.1340634054],
    [0.00000001086, 2.88721124443, 1262.3860848887],
    [0.00000001254, 5.74156595137, 527.9940440652],
    [0.00000001082, 5.60975006771, 531.1272536931],
    [0.00000001148, 3.27410230525, 1035.002907801],
    [0.00000001224, 3.6880753715, 81.7521332162],
    [0.00000001072, 0.48068438564, 1058.6311706638],
    [0.00000001036, 1.68789163831, 1070.4276304531],
    [0.00000001052, 4.72763208332, 913.7508863177],
    [0.00000001166, 4.97812626679, 450.9772132642],
    [0.00000001042, 2.90894542321, 3906.9087570986],
    [0.00000000997, 1.65967703856, 3259.8979237838],
    [0.00000001113, 3.06502453809, 1482.7987273275],
    [0.00000000991, 0.91568114148, 576.1613880106],
    [0.00000000987, 0.91349590742, 2332.0629558164],
    [0.00000001003, 6.17381204883, 391.1734682239],
    [0.00000001087, 3.19260020877, 151.0476698429],
    [0.00000000987, 2.48065918834, 1912.5783119412],
    [0.00000000975, 1.55458771092, 536.2832472336],
    [0.00000001193, 2.19383228, 523.0986829556],
    [0.00000000979, 3.2869362066, 1379.7059531089],
    [0.00000000963, 2.29845109892, 1467.8208738005],
    [0.00000001279, 4.73978455573, 600.5404103988],
    [0.00000001269, 1.77171706595, 5120.6011455836],
    [0.00000000938, 3.13636271584, 1372.5924061081],
    [0.00000000956, 0.94045126791, 429.7795846137],
    [0.0000000113, 4.87259620358, 874.3940104025],
    [0.00000001044, 3.52819283674, 530.5847369719],
    [0.00000001244, 0.80634178279, 419.532827985],
    [0.00000000914, 4.34324212455, 1127.0499817557],
    [0.00000001095, 3.17513475763, 6681.2248533996],
    [0.00000000926, 5.53099018797, 537.5552716208],
    [0.00000001025, 6.08315999637, 469.8872200543],
    [0.00000000928, 2.64064849636, 31.019488637],
    [0.00000000887, 5.53922649066, 498.6714764576],
    [0.00000001153, 5.20213407651, 554.0699874828],
    [0.00000000976, 4.2604788549, 806.725958836],
    [0.00000000871, 5.7975111015, 594.6507036754],
    [0.00000001044, 0.31244551729, 528.7971932173],
    [0.00000000911, 0.94039205468, 337.732510659],
    [0.00000001197, 3.12884590029, 1966.2317178272],
    [0.0000000093, 2.88178471518, 1056.4611688824],
    [0.00000001052, 1.69484089706, 484.444382456],
    [0.00000000862, 0.67309397482, 20426.571092422],
    [0.00000001152, 1.16751621652, 1489.9122743283],
    [0.00000000847, 3.25831322825, 1063.5747158832],
    [0.00000000884, 0.71487680084, 2042.4977891028],
    [0.00000000888, 5.38714907441, 5621.8429232104],
    [0.00000001137, 4.02029739425, 1670.0742689746],
    [0.00000000844, 3.3184679859, 812.1425848074],
    [0.0000000086, 4.78175008217, 530.914805372],
    [0.00000000835, 3.63117401608, 451.7279727896],
    [0.00000000931, 2.27352189963, 100.6450936638],
    [0.00000000939, 3.51238251326, 523.4711899711],
    [0.0000000086, 5.34207357904, 528.4671248172],
    [0.00000000875, 0.8777553711, 4326.3934009738],
    [0.00000000961, 5.69327275886, 498.1983957056],
    [0.00000000966, 6.25512226434, 700.4517908797],
    [0.00000000842, 3.20535945596, 1670.8250285],
    [0.00000000808, 1.09148925587, 683.1863154923],
    [0.0000000081, 5.47935192896, 525.5463635104],
    [0.00000000855, 6.06969867736, 446.3113468182],
    [0.00000000989, 1.55623875216, 1493.093668066],
    [0.00000000837, 1.49510080792, 1025.4416802454],
    [0.00000000974, 3.67667471757, 25565.3257234804],
    [0.00000000788, 0.51622458293, 526.9826521089],
    [0.0000000082, 1.86002542644, 629.8629780064],
    [0.00000000813, 0.45441968195, 4694.0029547076],
    [0.00000000953, 0.58786779132, 627.3671133418],
    [0.00000000908, 2.82093327912, 3046.5988283458],
    [0.00000000912, 2.69124310451, 946.727928415],
    [0.0000000082, 4.14947931572, 1884.124123938],
    [0.00000000948, 0.77931728039, 25551.09862947879],
    [0.00000000844, 0.00976249584, 628.5909536192],
    [0.0000000091, 0.99542530366, 5760.4984318976],
    [0.00000000844, 0.2263096449, 1123.1178284926],
    [0.00000000924, 4.41952345708, 5746.271337896],
    [0.00000000967, 3.20618313117, 9050.8108418032],
    [0.000000008, 0.10663079153, 4532.578949411],
    [0.00000000748, 3.01376405927, 5481.7545583808],
    [0.00000000752, 5.8236047289, 701.936263588],
    [0.00000000771, 0.12101982692, 635.70450062],
    [0.00000000725, 2.81220410314, 3597.6304344428],
    [0.00000000944, 0.40327408174, 1140.38330388],
    [0.00000000726, 5.28930472464, 1304.9243545416],
    [0.00000000994, 5.163913701, 10316.3783204296],
    [0.0000000089, 4.10819809692, 1060.1326897146],
    [0.00000000962, 1.48376004549, 1062.302691496],
    [0.00000000883, 5.26813169286, 1542.6024723678],
    [0.00000000916, 6.02908368648, 7.8643065262],
    [0.00000000725, 2.1877377301, 1176.7017984094],
    [0.00000000808, 5.81725174908, 1087.6931058405],
    [0.00000000757, 0.7744041433, 977.4867846211],
    [0.00000000838, 3.81585420192, 986.0848043302],
    [0.00000000888, 1.89634795578, 707.5653378805],
    [0.00000000854, 5.47701506544, 2818.035008606],
    [0.00000000796, 1.08794807212, 987.3086446076],
    [0.00000000856, 2.58042139486, 2803.8079146044],
    [0.00000000708, 1.09492310353, 248.7238180901],
    [0.00000000811, 3.23726191865, 121.2520214833],
    [0.00000000727, 1.56150632966, 4319.279853973],
    [0.00000000687, 2.65457835371, 1567.7322542814],
    [0.00000000675, 1.78690909614, 103.1409583284],
    [0.00000000853, 4.74476428852, 951.6232895246],
    [0.00000000832, 5.1436278981, 1054.7160637432],
    [0.00000000846, 1.47557828604, 898.7730327907],
    [0.00000000701, 1.72139817505, 5230.807466803],
    [0.00000000863, 3.98700238575, 686.958410061],
    [0.00000000703, 2.89202252444, 63.7358983034],
    [0.00000000673, 6.1161858051, 738.3241940866],
    [0.00000000806, 4.64475158248, 533.8355666788],
    [0.0000000067, 2.67625974048, 1012.9115072732],
    [0.00000000668, 4.93815253692, 5172.476235725],
    [0.00000000818, 1.41973280302, 580.0935412737],
    [0.00000000652, 3.41422919445, 650.9429865779],
    [0.00000000643, 2.46566726278, 1049.8207026336],
    [0.00000000859, 2.50530106631, 782.3469364478],
    [0.00000000662, 4.13533996643, 733.428832977],
    [0.00000000812, 1.30325352179, 1055.1891444952],
    [0.00000000638, 4.21760246824, 1064.0477966352],
    [0.00000000637, 6.13121700151, 4752.9915918498],
    [0.00000000636, 0.83411828974, 711.4974911436],
    [0.00000000642, 1.86741704507, 1053.9653042178],
    [0.00000000795, 4.54081089118, 1457.525933062],
    [0.00000000783, 4.37652961667, 105.5404547734],
    [0.0000000064, 5.44039474349, 632.0329797878],
    [0.00000000651, 5.02431301146, 528.0464336919],
    [0.00000000686, 0.27079898498, 11.7794134468],
    [0.00000000644, 5.36935176134, 835.7878940127],
    [0.00000000639, 1.86699974431, 6172.869528772],
    [0.0000000063, 2.86895754523, 633.5344988386],
    [0.00000000826, 1.46026926041, 2199.7652340692],
    [0.00000000687, 3.81221717134, 73.297125859],
    [0.00000000697, 4.18082589322, 1.6969210294],
    [0.00000000788, 0.21278801649, 313.9441891018],
    [0.00000000686, 2.51807576494, 638.4128136057],
    [0.00000000847, 5.56263749391, 4429.4861751924],
    [0.00000000673, 4.87494072856, 103.0445901088],
    [0.00000000663, 4.80713895807, 991.7138786227],
    [0.00000000614, 3.87231597482, 767.3690829208],
    [0.00000000666, 5.71697262323, 661.0949149645],
    [0.00000000681, 2.33844767741, 501.2367770914],
    [0.00000000597, 3.03921014345, 6.9534883064],
    [0.00000000777, 3.08786050361, 441.576044403],
    [0.00000000588, 0.08236113246, 4164.311989613],
    [0.00000000693, 4.66190836234, 3384.3313390048],
    [0.0000000081, 1.9770108449, 860.3099287528],
    [0.00000000602, 5.56403449542, 1587.5884225755],
    [0.00000000622, 6.11554348965, 7.065362891],
    [0.00000000592, 3.29013906024, 10103.0792249916],
    [0.00000000692, 6.10931942233, 12.7426212933],
    [0.00000000597, 6.13204711801, 7.2736056952],
    [0.00000000594, 2.58839673551, 849.2642284889],
    [0.00000000728, 2.73732195088, 6.1503391543],
    [0.00000000602, 5.28816527514, 949.12742486],
    [0.00000000568, 1.75508433865, 1077.5411774539],
    [0.00000000575, 4.50676079721, 1230.1427559743],
    [0.00000000588, 0.65827893998, 4642.7852706304],
    [0.00000000561, 3.8756591436, 135.336103133],
    [0.00000000558, 3.36094471852, 24498.8302462904],
    [0.00000000557, 3.45629457197, 19896.8801273274],
    [0.00000000558, 1.17103892689, 3576.2897934404],
    [0.00000000574, 5.1923507414, 104.0559820651],
    [0.0000000056, 3.57141429379, 5333.9002410216],
    [0.00000000555, 0.18349908409, 512.4254897072],
    [0.00000000571, 0.8307014882, 1570.9136480191],
    [0.00000000632, 3.67893818442, 1065.0110044817],
    [0.00000000744, 2.33083237537, 620.253566341],
    [0.0000000054, 5.15775909675, 1751.539531416],
    [0.00000000592, 3.07238123875, 1446.62324515],
    [0.00000000537, 1.52803865425, 8094.5216858326],
    [0.0000000055, 5.50701003577, 1432.3961511484],
    [0.00000000546, 2.34388967045, 949.2237930796],
    [0.00000000534, 3.04076654796, 7.1617311106],
    [0.00000000619, 6.07865159203, 46.470422916],
    [0.00000000562, 0.96641974928, 1438.0252254409],
    [0.00000000531, 1.0669554739, 100.1720129118],
    [0.00000000599, 3.59295739143, 1144.3154571431],
    [0.00000000526, 3.51641923371, 0.7507595254],
    [0.00000000564, 0.72677136494, 1059.2218714948],
    [0.00000000537, 5.72603965787, 513.2286388593],
    [0.0000000063, 2.311831439, 2729.4561991638],
    [0.0000000053, 4.99510636441, 9264.1099372412],
    [0.00000000649, 0.95666735852, 920.8644333185],
    [0.00000000547, 1.18801926149, 11506.7697697936],
    [0.00000000516, 3.28562070858, 734.9133056853],
    [0.00000000567, 5.13926871155, 288.0806940053],
    [0.00000000538, 0.2815963768, 153.4953503977],
    [0.00000000718, 0.48326672359, 842.1506814881],
    [0.00000000526, 4.39778401928, 546.1532913299],
    [0.00000000695, 2.44235086902, 657.1627617014],
    [0.00000000697, 4.99042365686, 12.5301729722],
    [0.00000000519, 6.27847163164, 59.8037450403],
    [0.00000000504, 2.58550284, 5378.6617841622],
    [0.00000000496, 2.43659402827, 990.2294059144],
    [0.00000000617, 5.732849857, 745.4377410874],
    [0.00000000519, 3.1015709777, 9161.0171630226],
    [0.00000000654, 1.31181453784, 878.3261636656],
    [0.00000000619, 3.71554817226, 2090.3096723752],
    [0.000000005, 4.28937439066, 5216.5803728014],
    [0.00000000621, 3.98893673383, 409.9234163196],
    [0.00000000685, 1.95310431695, 3156.8051495652],
    [0.00000000552, 2.81774132958, 344.7030453079],
    [0.00000000551, 1.91969778405, 113.3877149571],
    [0.00000000682, 0.87321578326, 6069.7767545534],
    [0.00000000651, 5.09951064975, 531.3354964973],
    [0.00000000537, 3.67357440226, 605.9570363702],
    [0.00000000525, 0.74584814988, 736.8397213783],
    [0.00000000505, 3.12494814307, 1475.6851803267],
    [0.00000000622, 3.00013939606, 2349.3284312038],
    [0.00000000644, 3.00156986335, 298.2326223919],
    [0.00000000564, 3.81960833949, 1059.5419888836],
    [0.00000000468, 3.50348554992, 4841.8572720668],
    [0.00000000491, 1.28535573072, 247.2393453818],
    [0.00000000458, 0.45056377876, 1065.6017053127],
    [0.00000000543, 2.3970430832, 9690.7081281172],
    [0.00000000459, 5.29870259698, 1474.9344208013],
    [0.00000000483, 3.63649121244, 131.4039498699],
    [0.00000000632, 2.75028345792, 334.5511169213],
    [0.00000000483, 0.42979609421, 735.828329422],
    [0.0000000054, 0.54791737146, 51646.11531805379],
    [0.00000000531, 0.30026207053, 912.7876784712],
    [0.00000000449, 3.02583472996, 5901.239202256],
    [0.00000000544, 2.98747240952, 4223.3006267552],
    [0.00000000557, 5.83542572008, 9676.4810341156],
    [0.00000000501, 0.03408180117, 1080.7225711916],
    [0.00000000517, 4.40400852026, 2545.3620512544],
    [0.00000000481, 3.63292807076, 5584.8473325994],
    [0.00000000557, 6.1144397819, 976.0023119128],
    [0.00000000481, 3.41035583659, 3803.81598288],
    [0.00000000622, 2.29597570837, 9999.986450773],
    [0.00000000454, 2.88584538455, 1987.2168981566],
    [0.00000000439, 4.83198101064, 50.4025761791],
    [0.00000000475, 2.69994471394, 491.8185618877],
    [0.00000000618, 0.72471290082, 1291.4309737229],
    [0.00000000503, 0.13449993622, 2015.6710861598],
    [0.00000000551, 2.13418546604, 1440.9941708575],
    [0.00000000595, 3.78181802545, 6386.16862421],
    [0.00000000434, 2.64411689486, 748.406686504],
    [0.00000000592, 0.32587740408, 737.3609862401],
    [0.0000000049, 2.379888288, 2225.7887878601],
    [0.00000000439, 1.33582802018, 995.6460318858],
    [0.00000000543, 2.05067702505, 906.849787638],
    [0.00000000466, 2.43707405011, 3362.9906980024],
    [0.00000000481, 2.32223226419, 1357.6145525811],
    [0.00000000566, 0.59740900184, 350.3321196004],
    [0.00000000429, 2.46287580628, 3914.0223040994],
    [0.00000000429, 1.01299906509, 4333.5069479746],
    [0.00000000425, 1.67255823369, 148.0787244263],
    [0.00000000412, 3.29630633921, 7.3259953219],
    [0.00000000508, 1.16158524676, 9.5612275556],
    [0.00000000524, 5.0256292612, 1090.4014188262],
    [0.00000000409, 5.80053072411, 9146.790069021],
    [0.00000000497, 0.01579913593, 1069.6768709277],
    [0.00000000548, 6.03429743373, 9367.2027114598],
    [0.00000000433, 5.9368835084, 1688.2335162393],
    [0.00000000424, 4.1815011153, 550.1378342197],
    [0.00000000401, 0.11519846139, 970.5162499722],
    [0.00000000503, 5.28212300854, 668.2084619653],
    [0.00000000555, 1.00328633255, 141.2258098564],
    [0.00000000404, 2.48633976473, 519.656656787],
    [0.00000000441, 6.06185501734, 25.1297819136],
    [0.00000000412, 5.87495245826, 6.9010986797],
    [0.00000000478, 0.71264950607, 1094.8066528413],
    [0.00000000446, 2.71248183031, 31.492569389],
    [0.00000000404, 5.49462012486, 447.9388318784],
    [0.00000000391, 1.261056127, 8.0767548473],
    [0.00000000463, 1.93535321271, 6275.9623029906],
    [0.00000000507, 3.61089992782, 546.956440482],
    [0.00000000402, 5.86200127054, 927.8349679674],
    [0.00000000481, 6.21043578332, 683.9894646444],
    [0.00000000483, 5.02142924458, 857.1285350151],
    [0.00000000444, 0.84873092377, 1371.8416465827],
    [0.00000000391, 2.81753436573, 5798.1464280374],
    [0.00000000395, 0.22367886581, 51116.4243529592],
    [0.00000000378, 6.03765733432, 1268.7488723641],
    [0.00000000471, 6.24506463249, 946.4672959841],
    [0.00000000405, 0.57785207581, 107.2855599126],
    [0.00000000371, 6.15750793727, 509.2440959695],
    [0.0000000037, 4.90330687618, 1436.5407527326],
    [0.00000000448, 4.76565111029, 284.1485407422],
    [0.00000000474, 0.71146352197, 2108.4689196399],
    [0.00000000509, 5.53328407404, 1128.534454464],
];

const R1: &[Term] = &[
    [0.01271801596, 2.64937511122, 529.6909650946],
    [0.00061661771, 3.00076251018, 1059.3819301892],
    [0.00053443592, 3.89717644226, 522.5774180938],
    [0.00031185167, 4.88276663526, 536.8045120954],
    [0.00041390257, 0.0, 0.0],
    [0.0001184719, 2.41329588176, 419.4846438752],
    [0.0000916636, 4.75979408587, 7.1135470008],
    [0.00003175763, 2.79297987071, 103.0927742186],
    [0.00003203446, 5.21083285476, 735.8765135318],
    [0.00003403605, 3.34688537997, 1589.0728952838],
    [0.00002600003, 3.63435101622, 206.1855484372],
    [0.00002412207, 1.46947308304, 426.598190876],
    [0.00002806064, 3.7422369358, 515.463871093],
    [0.00002676575, 4.33052878699, 1052.2683831884],
    [0.00002100507, 3.92762682306, 639.897286314],
    [0.00001646182, 5.30953510947, 1066.49547719],
    [0.00001641257, 4.41628669824, 625.6701923124],
    [0.00001049866, 3.16113622955, 213.299095438],
    [0.00001024802, 2.55432643018, 412.3710968744],
    [0.00000740996, 2.17094630558, 1162.4747044078],
    [0.00000806404, 2.6775080138, 632.7837393132],
    [0.00000676928, 6.2495347979, 838.9692877504],
    [0.00000468895, 4.70973463481, 543.9180590962],
    [0.00000444683, 0.40281181402, 323.5054166574],
    [0.00000567076, 4.57655414712, 742.9900605326],
    [0.00000415894, 5.36836018215, 728.762966531],
    [0.00000484689, 2.46882793186, 949.1756089698],
    [0.00000337555, 3.1678195112, 956.2891559706],
    [0.00000401738, 4.60528841541, 309.2783226558],
    [0.00000347378, 4.68148808722, 14.2270940016],
    [0.00000260753, 5.34290306101, 846.0828347512],
    [0.00000220084, 4.84210964963, 1368.660252845],
    [0.00000203217, 5.59995425432, 1155.361157407],
    [0.00000246603, 3.92313823537, 942.062061969],
    [0.00000183504, 4.26526769703, 95.9792272178],
    [0.00000180134, 4.40165491159, 532.8723588323],
    [0.00000197134, 3.70551461394, 2118.7638603784],
    [0.00000196005, 3.75877587139, 199.0720014364],
    [0.0000020019, 4.43888814441, 1045.1548361876],
    [0.00000170225, 4.84647488867, 526.5095713569],
    [0.00000146335, 6.12958365535, 533.6231183577],
    [0.00000133483, 1.32245735855, 110.2063212194],
    [0.00000132076, 4.51187950811, 525.7588118315],
    [0.00000123851, 2.04290370696, 1478.8665740644],
    [0.00000121861, 4.40581788491, 1169.5882514086],
    [0.00000115313, 4.46741278152, 1581.959348283],
    [0.00000098527, 5.72833991647, 1596.1864422846],
    [0.00000091608, 4.52965592121, 1685.0521225016],
    [0.00000110638, 3.62504147403, 1272.6810256272],
    [0.00000080536, 4.11311699583, 1258.4539316256],
    [0.00000079552, 2.71898473954, 1692.1656695024],
    [0.00000100164, 5.24693885858, 1265.5674786264],
    [0.00000077854, 5.56722651753, 1471.7530270636],
    [0.00000085766, 0.07906707372, 831.8557407496],
    [0.00000082132, 3.80763015979, 508.3503240922],
    [0.00000055319, 0.35180851191, 316.3918696566],
    [0.00000052338, 5.53074272117, 433.7117378768],
    [0.00000055769, 4.75141241141, 302.164775655],
    [0.00000050597, 4.8560316177, 1375.7737998458],
    [0.00000043554, 4.94441642712, 1361.5467058442],
    [0.00000042172, 1.22404278447, 853.196381752],
    [0.00000037695, 4.26767539209, 2001.4439921582],
    [0.00000049395, 4.01422828967, 220.4126424388],
    [0.00000038263, 5.33025236797, 1788.1448967202],
    [0.00000035611, 1.76205571128, 1795.258443721],
    [0.00000036296, 3.84995284393, 1574.8458012822],
    [0.00000029332, 5.16619257786, 3.9321532631],
    [0.0000002518, 4.33777727362, 519.3960243561],
    [0.00000024778, 2.7290789741, 405.2575498736],
    [0.00000027025, 6.09669947903, 1148.2476104062],
    [0.00000022604, 0.19173890105, 380.12776796],
    [0.00000020499, 4.32881495378, 3.1813937377],
    [0.00000019925, 4.62967500111, 1677.9385755008],
    [0.00000019528, 5.10596326232, 1073.6090241908],
    [0.00000018427, 3.765221783, 1485.9801210652],
    [0.00000018869, 5.05259402407, 2104.5367663768],
    [0.00000017031, 4.01843356903, 2317.8358618148],
    [0.00000016671, 5.42931676507, 88.865680217],
    [0.00000015337, 2.92700926091, 2008.557539159],
    [0.00000014499, 3.63339836845, 628.8515860501],
    [0.00000014575, 5.50832843322, 721.6494195302],
    [0.00000013728, 4.87623389735, 629.6023455755],
    [0.00000018481, 6.03032762264, 330.6189636582],
    [0.00000013499, 1.38539534821, 518.6452648307],
    [0.0000001574, 2.93038271684, 1905.4647649404],
    [0.00000012459, 1.58587053146, 2111.6503133776],
    [0.00000012272, 3.37671053917, 635.9651330509],
    [0.00000011836, 4.08486322993, 2648.454825473],
    [0.00000011166, 4.62623267608, 636.7158925763],
    [0.00000014348, 2.74177797727, 2221.856634597],
    [0.00000011221, 3.55311861205, 1891.2376709388],
    [0.00000013121, 5.83845065644, 1464.6394800628],
    [0.00000011351, 2.5760688623, 511.5317178299],
    [0.00000010487, 0.49850799841, 453.424893819],
    [0.00000009728, 4.38837468002, 1994.3304451574],
    [0.00000010131, 2.76432756215, 423.4167971383],
    [0.0000000862, 5.16374493158, 1056.2005364515],
    [0.00000008952, 4.79407952752, 2420.9286360334],
    [0.00000008126, 3.72977106954, 2634.2277314714],
    [0.00000008078, 1.29246272894, 2428.0421830342],
    [0.00000008867, 1.85684753622, 750.1036075334],
    [0.00000008912, 4.80973516711, 1062.5633239269],
    [0.00000008552, 4.53818617984, 21.3406410024],
    [0.00000009468, 4.33472161983, 1802.3719907218],
    [0.00000006904, 5.96616555709, 540.7366653585],
    [0.00000007293, 4.97763580465, 1699.2792165032],
    [0.00000007083, 4.99096728816, 1055.4497769261],
    [0.00000007226, 4.97823884383, 1898.3512179396],
    [0.00000006464, 1.39173466879, 422.6660376129],
    [0.00000006214, 4.46490158256, 551.031606097],
    [0.00000006794, 2.90878831415, 2324.9494088156],
    [0.00000006173, 3.65617162985, 621.7380390493],
    [0.00000006243, 6.13691919694, 2125.8774073792],
    [0.00000005936, 2.5831223512, 569.0478410098],
    [0.00000006504, 4.56908431757, 1038.0412891868],
    [0.00000007305, 3.02062127734, 416.3032501375],
    [0.00000006598, 5.55348005731, 1781.0313497194],
    [0.00000005133, 6.2164691798, 963.4027029714],
    [0.00000005876, 4.23153077453, 539.9859058331],
    [0.00000005119, 0.06942832171, 1063.3140834523],
    [0.0000000546, 4.91084384602, 835.0371344873],
    [0.00000004989, 1.3515369468, 1382.8873468466],
    [0.00000005224, 0.18468411116, 117.3198682202],
    [0.00000006187, 3.87193497099, 191.9584544356],
    [0.00000004681, 4.61057119508, 643.8294395771],
    [0.00000004627, 3.34644534691, 2207.6295405954],
    [0.00000004526, 4.07729737127, 2310.722314814],
    [0.00000004718, 4.55578336947, 2737.32050569],
    [0.00000004471, 1.47603161897, 408.4389436113],
    [0.00000004073, 1.1301490318, 415.5524906121],
    [0.00000005476, 5.63198569698, 618.5566453116],
    [0.00000004034, 4.09631702747, 430.5303441391],
    [0.00000004304, 4.60536378943, 647.0108333148],
    [0.00000003765, 3.42751259825, 2950.619601128],
    [0.00000004559, 4.23723998745, 227.5261894396],
    [0.00000003695, 1.03127824978, 2744.4340526908],
    [0.00000003667, 4.12268925541, 440.8252848776],
    [0.00000003677, 2.19480200527, 534.3568315406],
    [0.00000003818, 1.14800596289, 74.7815985673],
    [0.00000004221, 2.37721579949, 2538.2485042536],
    [0.00000003488, 5.33792561596, 458.8415197904],
    [0.00000003437, 4.26164443643, 10.2949407385],
    [0.00000004394, 0.18808423412, 824.7421937488],
    [0.00000003339, 4.85708402591, 295.0512286542],
    [0.00000003329, 5.50043586719, 739.8086667949],
    [0.00000003623, 4.64011531952, 2214.7430875962],
    [0.00000003185, 2.69708590442, 561.934294009],
    [0.00000003421, 3.38512615384, 149.5631971346],
    [0.00000003442, 4.34217280083, 305.3461693927],
    [0.0000000358, 5.29481665335, 2097.423219376],
    [0.00000003401, 2.74761862893, 2641.3412784722],
    [0.00000002901, 0.91012525424, 984.6003316219],
    [0.00000003566, 1.63400343968, 525.0250986486],
    [0.00000002869, 1.31799241974, 611.4430983108],
    [0.00000002635, 5.25517910535, 532.1386456494],
    [0.00000002683, 4.24641945773, 3053.7123753466],
    [0.00000002614, 3.17862099921, 527.2432845398],
    [0.00000002251, 4.2159824736, 739.0579072695],
    [0.00000002268, 5.5224811056, 524.2743391232],
    [0.00000002372, 4.19741177512, 217.2312487011],
    [0.00000002623, 5.82647427958, 732.6951197941],
    [0.00000002666, 3.92538056951, 210.1177017003],
    [0.00000002036, 4.84043420813, 1049.0869894507],
    [0.00000002441, 2.63840901843, 760.25553592],
    [0.00000002095, 5.76269812349, 529.6427809848],
    [0.00000002021, 3.81308146017, 2627.1141844706],
    [0.00000002089, 4.18463193132, 945.9942152321],
    [0.00000002305, 1.6122066569, 604.4725636619],
    [0.00000001969, 5.37427735384, 142.4496501338],
    [0.00000001923, 4.75088270631, 535.107591066],
    [0.00000001955, 5.49000238006, 1439.5096981492],
    [0.00000001877, 3.26978877187, 3267.0114707846],
    [0.00000002286, 2.93885172004, 76.2660712756],
    [0.00000002074, 5.85386852879, 532.6117264014],
    [0.00000002121, 3.92430797099, 2435.155730035],
    [0.00000001807, 3.17208959472, 2524.021410252],
    [0.00000001712, 4.02986641257, 731.9443602687],
    [0.00000002119, 0.41049593984, 1279.794572628],
    [0.0000000166, 2.34370903423, 528.7277572481],
    [0.00000001655, 0.78809717175, 3060.8259223474],
    [0.00000001729, 4.26127896267, 724.8308132679],
    [0.0000000206, 5.04785330873, 2413.8150890326],
    [0.00000002095, 2.67732367556, 529.7391492044],
    [0.00000001933, 2.49162437046, 2957.7331481288],
    [0.00000001898, 2.71948262975, 952.3570027075],
    [0.00000001634, 2.98113068812, 945.2434557067],
    [0.00000001582, 5.84373095005, 547.8502123593],
    [0.00000001662, 0.27359627181, 454.9093665273],
    [0.00000001595, 1.18530167095, 38.1330356378],
    [0.0000000155, 0.64264572959, 312.4597163935],
    [0.00000001525, 4.08789824989, 1158.5425511447],
    [0.00000001542, 1.12520322326, 1021.2488945514],
    [0.00000001539, 0.37324921979, 319.5732633943],
    [0.00000001628, 5.24285773388, 1354.4331588434],
    [0.00000001897, 3.79973291113, 953.1077622329],
    [0.0000000144, 4.37872256685, 3178.1457905676],
    [0.00000001439, 4.26513521887, 526.7702037878],
    [0.00000001557, 5.43779802371, 81.7521332162],
    [0.00000001656, 6.0966708974, 530.6541729411],
    [0.00000001548, 3.48799710267, 934.9485149682],
    [0.00000001772, 5.82549274759, 909.8187330546],
    [0.00000001615, 1.45018725033, 902.7051860538],
    [0.00000001387, 2.52840497309, 530.44172462],
    [0.00000001574, 1.89565809136, 437.6438911399],
    [0.00000001459, 3.32546061506, 1041.2226829245],
    [0.00000001377, 0.10015418633, 490.3340891794],
    [0.0000000146, 4.00706825185, 3370.1042450032],
    [0.00000001605, 4.27993020192, 2531.1349572528],
    [0.00000001707, 6.28253681644, 18.1592472647],
    [0.00000001802, 2.23019296374, 2854.6403739102],
    [0.0000000139, 3.76737324192, 1165.6560981455],
    [0.00000001498, 0.17285954362, 1141.1340634054],
    [0.00000001401, 4.81225317549, 1251.3403846248],
    [0.00000001244, 2.83383980283, 124.433415221],
    [0.0000000132, 5.80675430384, 387.2413149608],
    [0.00000001329, 0.88314574243, 916.9322800554],
    [0.00000001558, 6.17808619637, 983.1158589136],
    [0.00000001243, 0.29239666059, 597.3590166611],
    [0.00000001541, 3.51095241498, 2751.5475996916],
    [0.00000001482, 0.83066678204, 529.1697002328],
    [0.00000001149, 3.91142023857, 99.9113804809],
    [0.00000001114, 3.5333963729, 483.2205421786],
    [0.00000001195, 4.16301075999, 203.0041546995],
    [0.000000011, 1.74769285223, 497.4476361802],
    [0.00000001458, 5.19315120878, 1592.2542890215],
    [0.00000001123, 1.45270581179, 533.8837507886],
    [0.00000001078, 5.2399179294, 1159.2933106701],
    [0.00000001083, 3.57026506855, 2943.5060541272],
    [0.00000001072, 0.07132659992, 1070.4276304531],
    [0.00000001037, 5.48955598976, 1585.8915015461],
    [0.00000001343, 0.29600445633, 860.3099287528],
    [0.00000001361, 3.46603373194, 107.0249274817],
    [0.00000001061, 2.44580706826, 1048.3362299253],
    [0.00000001002, 5.5521611741, 337.732510659],
    [0.00000000981, 3.15500987023, 70.8494453042],
    [0.00000001007, 4.11504050436, 501.2367770914],
    [0.00000000965, 5.63719524421, 1603.2999892854],
    [0.00000001083, 4.8837390981, 1166.4068576709],
    [0.00000000953, 2.83352026342, 3583.4033404412],
    [0.0000000106, 3.18542176646, 447.7958195265],
    [0.00000001136, 2.2656859095, 525.4981794006],
    [0.00000001191, 2.25249961404, 106.2741679563],
    [0.00000000884, 4.69777781327, 960.2213092337],
    [0.00000001165, 1.56030440737, 630.3360587584],
    [0.00000000947, 0.50856414717, 842.9014410135],
    [0.00000001011, 0.30814674949, 1593.0050485469],
    [0.00000000924, 2.31939900786, 327.4375699205],
    [0.00000000896, 0.22222521202, 746.9222137957],
    [0.00000001078, 4.78329116086, 2730.2069586892],
    [0.00000000938, 5.42471506763, 1585.1407420207],
    [0.00000000923, 4.44469169065, 9676.4810341156],
    [0.00000000894, 0.2694082187, 2655.5683724738],
    [0.00000001131, 5.46382510304, 224.3447957019],
    [0.00000000808, 0.48295590141, 3377.217792004],
    [0.00000000809, 4.14122746067, 114.1384744825],
    [0.00000000864, 1.83217006136, 4.665866446],
    [0.00000001106, 2.60444312553, 209.3669421749],
    [0.0000000079, 0.11493626208, 460.5384408198],
    [0.00000000799, 1.6042649759, 5223.6939198022],
    [0.00000000933, 0.30976125598, 685.4739373527],
    [0.00000001053, 5.23433104008, 842.1506814881],
    [0.00000000846, 3.0287839349, 5746.271337896],
    [0.00000000799, 2.08457026425, 77734.01845962799],
    [0.0000000082, 0.99821486743, 373.0142209592],
    [0.00000000892, 5.36446426391, 827.9235874865],
    [0.00000000821, 3.53889274951, 498.6714764576],
    [0.00000000741, 1.32379374647, 530.2122299564],
    [0.0000000079, 2.88034567513, 938.1299087059],
    [0.00000000842, 3.39449778904, 484.444382456],
    [0.00000000785, 0.57841470897, 850.0149880143],
    [0.00000000759, 3.82014112009, 6283.0758499914],
    [0.00000000954, 2.94534072982, 462.0229135281],
    [0.00000000767, 3.33725133157, 99.1606209555],
    [0.0000000081, 4.69425300466, 2228.9701815978],
    [0.000000007, 1.72050221502, 775.233389447],
    [0.00000000764, 4.91747674296, 1670.8250285],
    [0.00000000724, 6.08692841992, 2281.2304965106],
    [0.00000000711, 4.82250918143, 11.7794134468],
    [0.00000000692, 2.63705354662, 6.592282139],
    [0.00000000771, 3.87410612014, 9690.7081281172],
    [0.00000000906, 2.47189948442, 3274.1250177854],
    [0.00000000781, 1.25357484582, 202.2533951741],
    [0.00000000757, 3.78079814332, 2818.035008606],
    [0.00000000756, 4.28312053897, 2803.8079146044],
    [0.00000000663, 5.27704405712, 4532.578949411],
    [0.00000000759, 5.4535868657, 9683.5945811164],
    [0.00000000698, 5.43712520216, 565.1156877467],
    [0.00000000709, 3.71117647887, 3686.4961146598],
    [0.00000000677, 4.27891183416, 25028.521211385],
    [0.00000000643, 1.40239510103, 9161.0171630226],
    [0.00000000656, 0.60909845504, 835.7878940127],
    [0.00000000635, 5.75373871128, 429.7795846137],
    [0.00000000702, 6.10412979847, 4635.6717236296],
    [0.00000000627, 3.03666956129, 2840.4132799086],
    [0.00000000802, 4.18688054701, 5753.3848848968],
    [0.00000000838, 4.51386507097, 1069.6768709277],
    [0.00000000633, 4.37183361444, 5.4166259714],
    [0.00000000652, 5.79409889124, 1061.829610744],
    [0.00000000638, 2.18896270346, 313.2104759189],
    [0.00000000827, 5.94231186039, 1457.525933062],
    [0.00000000678, 2.45013730979, 5760.4984318976],
    [0.00000000814, 4.8957879117, 1567.7322542814],
    [0.00000000624, 0.61631100566, 1176.7017984094],
    [0.000000006, 3.20918322285, 1098.7388061044],
    [0.00000000717, 1.8234906449, 3171.0322435668],
    [0.00000000651, 4.14419317491, 2847.5268269094],
    [0.00000000629, 1.75272560843, 92.0470739547],
    [0.00000000626, 3.53146082217, 3067.9394693482],
    [0.00000000667, 4.22974611158, 4539.6924964118],
    [0.00000000565, 0.99416346033, 1894.4190646765],
    [0.00000000752, 0.4606370015, 635.231419868],
    [0.00000000622, 1.98136818407, 25565.3257234804],
    [0.00000000614, 2.48275371627, 25551.09862947879],
    [0.0000000056, 1.40733893388, 446.3113468182],
    [0.00000000558, 4.37217796469, 1057.8974574809],
    [0.00000000628, 4.65037810102, 6275.9623029906],
    [0.00000000659, 2.41470950463, 195.1398481733],
    [0.00000000616, 2.08837621877, 10.0343083076],
    [0.00000000692, 3.1322902553, 7.6348118626],
    [0.00000000685, 4.18539472904, 46.470422916],
    [0.00000000624, 0.02693303471, 1493.093668066],
    [0.00000000594, 2.13375704438, 121.2520214833],
    [0.00000000508, 2.1358430071, 1.6969210294],
    [0.00000000674, 1.47570122611, 4694.0029547076],
    [0.00000000559, 4.48852017557, 531.1754378029],
    [0.0000000064, 3.10239233469, 11.0457002639],
    [0.00000000496, 1.29000001439, 927.8349679674],
    [0.00000000587, 3.30651435298, 600.5404103988],
    [0.00000000582, 0.4454094886, 113.3877149571],
    [0.00000000492, 4.83275232, 9492.1463150048],
    [0.00000000549, 4.34579166146, 3046.5988283458],
    [0.00000000576, 1.22846846364, 1514.2912967165],
    [0.00000000593, 5.86079640612, 524.0618908021],
    [0.0000000051, 2.6255703127, 529.851023789],
    [0.00000000489, 6.26855707323, 3693.6096616606],
    [0.0000000048, 0.30754294369, 528.9402055692],
    [0.00000000582, 3.51934668795, 1056.9342496344],
    [0.00000000493, 5.52699906925, 512.2824773553],
    [0.00000000481, 2.99681040149, 9153.9036160218],
    [0.00000000562, 3.73437025868, 2015.6710861598],
    [0.00000000458, 3.86646994292, 11.3063326948],
    [0.00000000457, 1.80238019931, 3281.2385647862],
    [0.00000000453, 6.17995938655, 1059.3337460794],
    [0.00000000551, 0.13794958618, 1912.5783119412],
    [0.00000000446, 5.53828660924, 2332.0629558164],
    [0.00000000444, 5.06219342598, 7.8643065262],
    [0.00000000461, 0.16951411708, 26087.9031415742],
    [0.00000000439, 4.14986379679, 1151.4290041439],
    [0.00000000614, 5.42289673768, 2090.3096723752],
    [0.00000000488, 3.71681959056, 447.9388318784],
    [0.00000000592, 2.91424148255, 8624.2126509272],
    [0.00000000433, 2.55336268329, 1064.0477966352],
    [0.00000000449, 5.24955106938, 10213.285546211],
    [0.0000000051, 5.81591864532, 529.5309064002],
    [0.00000000435, 5.34355963629, 560.7104537316],
    [0.00000000449, 0.72330388784, 2758.6611466924],
    [0.0000000043, 0.94519103478, 6.3627874754],
    [0.00000000563, 6.19175228344, 1884.124123938],
    [0.00000000443, 3.39246520261, 1152.1797636693],
    [0.0000000043, 1.28652623263, 505.3119427064],
    [0.00000000422, 5.12631540623, 944.9828232758],
    [0.00000000464, 2.90444584145, 398.1440028728],
    [0.0000000041, 1.24248975309, 5069.3834615064],
    [0.00000000411, 2.95117124177, 4326.3934009738],
    [0.00000000418, 5.15499986314, 1173.5204046717],
    [0.00000000412, 2.9812544633, 554.0699874828],
    [0.00000000403, 0.34381388674, 32.2433289144],
    [0.00000000402, 5.88926765351, 1570.9136480191],
    [0.00000000505, 1.49028912471, 3782.4753418776],
    [0.00000000447, 0.03952029309, 245.5424243524],
    [0.00000000453, 3.09458004153, 1059.430114299],
    [0.00000000411, 3.21727542472, 1475.6851803267],
    [0.00000000426, 3.12237794195, 12566.1516999828],
    [0.00000000434, 3.59362426939, 3259.8979237838],
    [0.00000000398, 4.91510709622, 4120.2078525366],
    [0.00000000399, 4.67075122011, 234.6397364404],
    [0.00000000386, 4.81320787761, 970.5162499722],
    [0.00000000427, 3.21176085113, 977.4867846211],
    [0.00000000411, 4.31566962034, 757.2171545342],
    [0.00000000392, 1.86527946688, 885.4397106664],
    [0.00000000416, 3.81408093105, 3156.8051495652],
];

const R2: &[Term] = &[
    [0.00079644833, 1.35865896596, 529.6909650946],
    [0.00008251618, 5.77773935444, 522.5774180938],
    [0.00007029864, 3.27476965833, 536.8045120954],
    [0.00005314006, 1.83835109712, 1059.3819301892],
    [0.00001860833, 2.97682139367, 7.1135470008],
    [0.00000836267, 4.19889881718, 419.4846438752],
    [0.00000964466, 5.48031822015, 515.463871093],
    [0.00000406453, 3.78250730354, 1066.49547719],
    [0.0000042657, 2.22753101795, 639.897286314],
    [0.00000377316, 2.24248352873, 1589.0728952838],
    [0.0000049792, PI, 0.0],
    [0.00000339043, 6.12690864038, 625.6701923124],
    [0.00000362943, 5.36761847267, 206.1855484372],
    [0.00000342048, 6.09922969324, 1052.2683831884],
    [0.0000027992, 4.26162555827, 412.3710968744],
    [0.00000332578, 0.00328961161, 426.598190876],
    [0.00000229777, 0.70530766213, 735.8765135318],
    [0.00000200783, 3.06850623368, 543.9180590962],
    [0.00000199807, 4.42884165317, 103.0927742186],
    [0.0000025729, 0.96295364983, 632.7837393132],
    [0.00000138606, 2.93235671606, 14.2270940016],
    [0.00000113535, 0.78713911289, 728.762966531],
    [0.00000086025, 5.14434751994, 323.5054166574],
    [0.00000094565, 1.70498041073, 838.9692877504],
    [0.00000083469, 0.05834873484, 309.2783226558],
    [0.00000075198, 1.60495195911, 956.2891559706],
    [0.00000070451, 1.50988357484, 213.299095438],
    [0.00000080328, 2.98122361797, 742.9900605326],
    [0.00000056203, 0.95534810533, 1162.4747044078],
    [0.00000061649, 6.10137889854, 1045.1548361876],
    [0.00000066572, 5.47307178077, 199.0720014364],
    [0.00000050057, 2.72063162317, 532.8723588323],
    [0.00000051904, 5.58435625607, 942.062061969],
    [0.00000039833, 5.94566506227, 95.9792272178],
    [0.00000044548, 5.52445621411, 508.3503240922],
    [0.00000044282, 0.27118152557, 526.5095713569],
    [0.00000029944, 0.93641735919, 1155.361157407],
    [0.00000028412, 2.87835720211, 525.7588118315],
    [0.0000002633, 4.26891877269, 1596.1864422846],
    [0.00000027039, 2.80607741398, 1169.5882514086],
    [0.00000027477, 2.64841266238, 2118.7638603784],
    [0.00000022705, 0.17830004133, 302.164775655],
    [0.00000029347, 1.7858969235, 831.8557407496],
    [0.00000019991, 0.04328951895, 949.1756089698],
    [0.00000019906, 1.16072627347, 533.6231183577],
    [0.00000021714, 1.88820231818, 1272.6810256272],
    [0.00000017581, 4.14974757919, 846.0828347512],
    [0.00000017085, 5.89188996975, 1258.4539316256],
    [0.00000021407, 4.35468497204, 316.3918696566],
    [0.00000021295, 0.54429472455, 1265.5674786264],
    [0.00000019859, 0.064538258, 1581.959348283],
    [0.00000017025, 0.53383755278, 1368.660252845],
    [0.00000012804, 3.90044242142, 433.7117378768],
    [0.00000013072, 0.79468040717, 110.2063212194],
    [0.00000011945, 0.40671403646, 1361.5467058442],
    [0.00000011695, 4.44394618065, 405.2575498736],
    [0.00000011979, 2.22872778682, 220.4126424388],
    [0.00000009633, 6.01002272123, 853.196381752],
    [0.00000010163, 0.99504635158, 1471.7530270636],
    [0.00000008977, 1.60328709409, 1692.1656695024],
    [0.00000008701, 3.52167876799, 1073.6090241908],
    [0.00000008314, 5.60169732564, 1574.8458012822],
    [0.00000008958, 6.26708748901, 519.3960243561],
    [0.00000007828, 0.65241611799, 1478.8665740644],
    [0.00000007833, 0.17920601344, 1685.0521225016],
    [0.00000007451, 0.88421084942, 88.865680217],
    [0.0000000732, 0.89341249264, 721.6494195302],
    [0.00000009135, 1.51210840939, 1148.2476104062],
    [0.0000000611, 2.50080005128, 3.1813937377],
    [0.00000007037, 4.44127496638, 330.6189636582],
    [0.00000005163, 2.79219166952, 21.3406410024],
    [0.00000005079, 2.97991736844, 1375.7737998458],
    [0.0000000493, 0.04683167622, 1677.9385755008],
    [0.00000004664, 2.28007273876, 1485.9801210652],
    [0.00000004692, 0.86220230505, 3.9321532631],
    [0.00000005307, 0.85008578245, 1788.1448967202],
    [0.00000004239, 0.40758287124, 629.6023455755],
    [0.0000000423, 1.61046658091, 635.9651330509],
    [0.00000003627, 2.71151441113, 551.031606097],
    [0.00000003314, 0.55067236587, 1795.258443721],
    [0.00000004409, 1.2812775105, 1464.6394800628],
    [0.0000000327, 1.18744032691, 1905.4647649404],
    [0.00000003226, 6.18716071251, 1038.0412891868],
    [0.00000003103, 6.22971614425, 2001.4439921582],
    [0.0000000341, 2.44624067925, 539.9859058331],
    [0.00000003174, 5.54870592599, 191.9584544356],
    [0.0000000259, 3.24430559059, 1062.5633239269],
    [0.00000002614, 0.55149554149, 2104.5367663768],
    [0.00000002174, 5.32613824409, 1891.2376709388],
    [0.00000002659, 4.8245997422, 416.3032501375],
    [0.00000002187, 1.71707514653, 628.8515860501],
    [0.00000002263, 6.19233486371, 1994.3304451574],
    [0.00000002328, 4.28236795066, 963.4027029714],
    [0.00000002579, 0.03256542251, 1898.3512179396],
    [0.00000002077, 3.32602157426, 1699.2792165032],
    [0.00000002529, 2.39697505835, 227.5261894396],
    [0.00000002468, 0.06551346218, 750.1036075334],
    [0.00000001989, 0.29206371261, 636.7158925763],
    [0.00000001927, 0.32286661566, 295.0512286542],
    [0.00000001904, 3.43534792123, 647.0108333148],
    [0.0000000194, 0.29170673525, 2111.6503133776],
    [0.0000000188, 3.14403615586, 611.4430983108],
    [0.00000002324, 1.94960720763, 824.7421937488],
    [0.00000001854, 4.71794950485, 2125.8774073792],
    [0.00000002547, 1.2390835309, 2221.856634597],
    [0.00000001814, 1.60250861074, 2008.557539159],
    [0.00000001611, 5.83466560322, 422.6660376129],
    [0.00000001667, 2.32455940876, 440.8252848776],
    [0.00000001622, 0.36650974375, 1056.2005364515],
    [0.00000001624, 2.42139677881, 10.2949407385],
    [0.00000001622, 3.51892791175, 1055.4497769261],
    [0.00000001606, 5.76205763975, 117.3198682202],
    [0.00000001646, 5.88662636573, 2317.8358618148],
    [0.00000002026, 4.61781314145, 423.4167971383],
    [0.00000002098, 1.04559231028, 1781.0313497194],
    [0.00000001868, 1.12487729469, 618.5566453116],
    [0.00000001885, 2.78775930564, 1802.3719907218],
    [0.00000001445, 0.08308050305, 1382.8873468466],
    [0.00000001797, 3.00776822706, 2648.454825473],
    [0.00000001422, 0.17649746278, 2420.9286360334],
    [0.00000001129, 1.5903029132, 380.12776796],
    [0.00000001126, 4.199896736, 547.8502123593],
    [0.00000001186, 5.98943062173, 2310.722314814],
    [0.00000001108, 4.22655117757, 934.9485149682],
    [0.00000001259, 1.19687222266, 1063.3140834523],
    [0.00000001072, 3.86169004168, 1603.2999892854],
    [0.00000000946, 5.59968097387, 99.9113804809],
    [0.00000000937, 1.0308327676, 81.7521332162],
    [0.00000000938, 6.18136092771, 945.9942152321],
    [0.00000000908, 2.54355964041, 6283.0758499914],
    [0.00000000874, 5.21903196047, 2207.6295405954],
    [0.00000000874, 6.01240284465, 511.5317178299],
    [0.00000001188, 0.75698357968, 2097.423219376],
    [0.00000000789, 3.91035208173, 10213.285546211],
    [0.00000001, 1.34667100304, 732.6951197941],
    [0.00000000952, 1.5535577742, 2324.9494088156],
    [0.00000000811, 5.00475553271, 319.5732633943],
    [0.00000000763, 3.9852755963, 337.732510659],
    [0.0000000088, 1.14789972199, 952.3570027075],
    [0.0000000078, 4.6946331693, 5746.271337896],
    [0.0000000091, 0.08774541571, 2737.32050569],
    [0.00000000773, 0.77131695762, 5760.4984318976],
    [0.00000000764, 6.11686539353, 9676.4810341156],
    [0.00000000758, 2.1935071986, 9690.7081281172],
    [0.00000000671, 1.19532387143, 124.433415221],
    [0.00000000661, 5.99578306627, 501.2367770914],
    [0.00000000729, 0.65312263578, 2538.2485042536],
    [0.00000000825, 2.70770030205, 3370.1042450032],
    [0.0000000067, 5.44169923277, 107.0249274817],
    [0.00000000739, 1.14609907817, 2641.3412784722],
    [0.00000000866, 3.02831268213, 3046.5988283458],
    [0.00000000718, 4.83684196454, 860.3099287528],
    [0.00000000813, 6.01229270247, 2214.7430875962],
    [0.00000000746, 1.12371143332, 739.8086667949],
    [0.00000000741, 5.9317166201, 2634.2277314714],
    [0.00000000667, 0.89885058003, 106.2741679563],
    [0.00000000573, 2.42701822581, 739.0579072695],
    [0.00000000734, 0.72837704619, 1354.4331588434],
    [0.00000000662, 2.2176897639, 2015.6710861598],
    [0.00000000782, 2.52401202862, 3679.382567659],
    [0.00000000779, 2.38608991574, 3267.0114707846],
    [0.00000000553, 1.85211127676, 453.424893819],
    [0.00000000701, 4.23431087374, 9683.5945811164],
    [0.00000000571, 2.98435419019, 1262.3860848887],
    [0.00000000621, 1.2446288744, 3803.81598288],
    [0.00000000563, 5.99845316446, 1049.0869894507],
    [0.00000000538, 4.92334194042, 447.7958195265],
    [0.00000000534, 0.99911551571, 462.0229135281],
    [0.00000000541, 6.19275150397, 1987.2168981566],
    [0.00000000511, 3.2855327837, 4.665866446],
    [0.00000000539, 5.33214565622, 2751.5475996916],
    [0.00000000651, 5.12199308959, 3156.8051495652],
    [0.00000000483, 3.03782387056, 3281.2385647862],
    [0.00000000476, 2.17592053936, 149.5631971346],
    [0.0000000051, 5.35664230912, 9.5612275556],
    [0.0000000049, 1.57324553106, 1251.3403846248],
    [0.00000000467, 5.9234342384, 203.0041546995],
    [0.00000000528, 5.81786945766, 2627.1141844706],
    [0.00000000447, 3.51498961805, 18.1592472647],
    [0.00000000429, 0.16627197188, 74.7815985673],
    [0.00000000497, 0.30985248432, 2428.0421830342],
    [0.00000000516, 3.89424540015, 2516.9078632512],
    [0.00000000519, 2.43126348834, 3686.4961146598],
    [0.00000000404, 2.77840802846, 7.1617311106],
    [0.00000000533, 4.77083438961, 3473.1970192218],
    [0.00000000515, 3.54549816613, 3178.1457905676],
    [0.00000000533, 5.61415688189, 2524.021410252],
    [0.00000000458, 4.91616403047, 3067.9394693482],
    [0.000000004, 3.13887720912, 540.7366653585],
    [0.00000000378, 0.8612245094, 525.0250986486],
];

const R3: &[Term] = &[
    [0.00003519257, 6.05800633846, 529.6909650946],
    [0.00001073239, 1.6732134576, 536.8045120954],
    [0.00000915666, 1.41329676116, 522.5774180938],
    [0.00000341593, 0.52296542656, 1059.3819301892],
    [0.00000254893, 1.19625473533, 7.1135470008],
    [0.00000221512, 0.95225226237, 515.463871093],
    [0.00000069078, 2.26885282314, 1066.49547719],
    [0.00000089729, PI, 0.0],
    [0.00000057827, 1.41389745339, 543.9180590962],
    [0.00000057653, 0.52580117593, 639.897286314],
    [0.00000051079, 5.98016364677, 412.3710968744],
    [0.00000046935, 1.57864237959, 625.6701923124],
    [0.00000042824, 6.11689609099, 419.4846438752],
    [0.00000037477, 1.1826276233, 14.2270940016],
    [0.00000033816, 1.66671706951, 1052.2683831884],
    [0.00000031195, 1.04290245896, 1589.0728952838],
    [0.00000030023, 4.63236245032, 426.598190876],
    [0.00000033531, 0.84784977903, 206.1855484372],
    [0.00000020804, 2.50071243814, 728.762966531],
    [0.00000014466, 0.96040197071, 508.3503240922],
    [0.00000012969, 1.5023378855, 1045.1548361876],
    [0.00000011654, 3.55513510121, 323.5054166574],
    [0.00000012319, 2.60952614503, 735.8765135318],
    [0.00000015023, 0.89136998434, 199.0720014364],
    [0.0000001116, 1.79041437555, 309.2783226558],
    [0.00000010554, 6.27845112678, 956.2891559706],
    [0.00000009812, 6.26016859519, 103.0927742186],
    [0.00000009301, 3.45126812476, 838.9692877504],
    [0.00000006672, 1.87004905364, 302.164775655],
    [0.00000007442, 1.28047007623, 742.9900605326],
    [0.00000007178, 0.92022189637, 942.062061969],
    [0.00000005577, 1.37980792905, 95.9792272178],
    [0.00000006834, 3.45228722967, 831.8557407496],
    [0.00000004632, 2.82934545414, 1596.1864422846],
    [0.00000003969, 1.21290005054, 1169.5882514086],
    [0.00000003869, 5.99495313698, 213.299095438],
    [0.00000003551, 6.10714791535, 405.2575498736],
    [0.00000002943, 2.32831075458, 1155.361157407],
    [0.00000002442, 1.86965213405, 532.8723588323],
    [0.0000000241, 0.42627205128, 220.4126424388],
    [0.00000002289, 1.94941487274, 1073.6090241908],
    [0.00000002274, 0.09211517505, 632.7837393132],
    [0.00000002189, 1.58907745204, 2118.7638603784],
    [0.00000002387, 5.97080671477, 1162.4747044078],
    [0.00000002104, 1.06751462671, 21.3406410024],
    [0.00000002128, 1.51119399925, 1258.4539316256],
    [0.00000002491, 0.35125020737, 1272.6810256272],
    [0.00000002006, 5.9448738836, 110.2063212194],
    [0.0000000198, 2.54989377864, 88.865680217],
    [0.0000000204, 2.16463966964, 433.7117378768],
    [0.00000001955, 2.70341589777, 721.6494195302],
    [0.0000000167, 4.46255717328, 853.196381752],
    [0.0000000191, 2.25964760758, 1361.5467058442],
    [0.0000000171, 1.98372066321, 525.7588118315],
    [0.0000000152, 0.11641358425, 949.1756089698],
    [0.00000002003, 3.16520599208, 1148.2476104062],
    [0.0000000171, 2.70850417287, 330.6189636582],
    [0.00000001629, 0.47376028854, 526.5095713569],
    [0.00000001229, 3.01987279595, 963.4027029714],
    [0.00000001671, 0.44352103086, 533.6231183577],
    [0.00000001207, 1.15774089269, 1574.8458012822],
    [0.00000001146, 2.54505851138, 846.0828347512],
    [0.00000001355, 1.17462112647, 1038.0412891868],
    [0.00000001001, 2.70272799283, 519.3960243561],
    [0.00000001372, 0.67467128629, 551.031606097],
    [0.00000000983, 4.17198081351, 2627.1141844706],
    [0.00000001084, 1.07011164067, 227.5261894396],
    [0.00000000892, 2.92543286761, 1368.660252845],
    [0.00000000823, 4.86559196955, 611.4430983108],
    [0.00000001136, 1.78981738432, 1581.959348283],
    [0.00000000897, 4.9107363027, 1670.8250285],
    [0.00000000908, 3.6880404733, 824.7421937488],
    [0.00000000789, 3.2338089325, 2125.8774073792],
    [0.00000000771, 2.39070707004, 2317.8358618148],
    [0.00000000891, 0.59692950778, 539.9859058331],
    [0.00000000876, 4.52127091462, 750.1036075334],
    [0.00000000802, 0.20759322884, 1141.1340634054],
    [0.0000000085, 0.94145487094, 191.9584544356],
    [0.00000000762, 2.25149516048, 2538.2485042536],
    [0.00000000694, 0.67080348659, 440.8252848776],
    [0.00000000741, 5.79934203525, 1485.9801210652],
    [0.00000000643, 2.48127580335, 1265.5674786264],
    [0.00000000575, 6.13756590872, 1279.794572628],
    [0.00000000636, 5.51001645505, 2413.8150890326],
    [0.00000000636, 4.40777238491, 1382.8873468466],
    [0.00000000555, 2.18233983981, 1062.5633239269],
    [0.00000000564, 1.92775967119, 2634.2277314714],
    [0.00000000531, 2.04824376019, 295.0512286542],
    [0.00000000541, 2.32424368689, 1471.7530270636],
    [0.00000000697, 2.27179476322, 1699.2792165032],
    [0.00000000546, 1.9577490573, 1677.9385755008],
    [0.00000000465, 4.35550844067, 1692.1656695024],
    [0.00000000508, 2.50298248836, 2207.6295405954],
    [0.00000000496, 5.77087043616, 1478.8665740644],
    [0.0000000044, 5.98661963879, 934.9485149682],
    [0.00000000424, 2.80194129521, 81.7521332162],
    [0.00000000406, 3.93940190897, 316.3918696566],
    [0.00000000506, 0.18719982992, 10.2949407385],
];

const R4: &[Term] = &[
    [0.00000128628, 0.08419309557, 536.8045120954],
    [0.00000113458, 4.24858855779, 529.6909650946],
    [0.0000008265, 3.29754909408, 522.5774180938],
    [0.00000037883, 2.73326611144, 515.463871093],
    [0.00000026694, 5.69142588558, 7.1135470008],
    [0.0000001765, 5.40012536918, 1059.3819301892],
    [0.00000012612, 6.01560416057, 543.9180590962],
    [0.00000009287, 0.76813946494, 1066.49547719],
    [0.00000008107, 5.68228065707, 14.2270940016],
    [0.00000006271, 5.12286932534, 639.897286314],
    [0.00000006978, 1.42751292055, 412.3710968744],
    [0.00000005377, 3.33501947275, 625.6701923124],
    [0.00000002911, 3.40334805052, 1052.2683831884],
    [0.00000002593, 4.16090412984, 728.762966531],
    [0.00000002562, 2.89802035072, 426.598190876],
    [0.00000002268, 6.22195938856, 1589.0728952838],
    [0.00000002114, 3.11758855774, 1045.1548361876],
    [0.00000001673, 2.81399290364, 206.1855484372],
    [0.00000001805, 2.60030006919, 199.0720014364],
    [0.00000001823, 1.89432426038, 419.4846438752],
    [0.00000001522, 1.33432648232, 1596.1864422846],
    [0.00000001697, 0.0, 0.0],
    [0.00000001039, 4.41904942302, 956.2891559706],
    [0.00000001161, 5.16181311538, 831.8557407496],
    [0.00000000916, 3.17245716108, 508.3503240922],
    [0.0000000087, 5.793878135, 1169.5882514086],
    [0.00000000916, 1.87129662931, 1148.2476104062],
    [0.00000000955, 0.66801367802, 1361.5467058442],
    [0.00000000788, 1.47515450553, 1272.6810256272],
    [0.00000000966, 5.47457968043, 220.4126424388],
    [0.00000000788, 2.42252866885, 117.3198682202],
    [0.00000000712, 0.4965589703, 1073.6090241908],
    [0.00000000656, 3.53022740783, 302.164775655],
    [0.00000000681, 2.8450717434, 191.9584544356],
    [0.00000000771, 2.19893222018, 942.062061969],
    [0.00000000765, 5.311472577, 551.031606097],
    [0.00000000667, 3.72432305249, 88.865680217],
    [0.00000000534, 1.83172084748, 647.0108333148],
    [0.00000000553, 0.85896003802, 330.6189636582],
    [0.00000000543, 5.26057584439, 21.3406410024],
    [0.00000000584, 3.82243061802, 618.5566453116],
    [0.00000000512, 4.44485521707, 110.2063212194],
    [0.00000000612, 1.59320941864, 3.1813937377],
    [0.00000000631, 1.83863158533, 10.2949407385],
    [0.00000000491, 1.52912023181, 405.2575498736],
    [0.00000000521, 0.24011424451, 433.7117378768],
];

pub static JUPITER: Vsop87Table = Vsop87Table {
    variables: Variables::Spherical,
    reference: Reference::EclipticOfDate,
    series: [
        &[L0, L1, L2, L3, L4, L5],
        &[B0, B1, B2, B3, B4, B5],
        &[R0, R1, R2, R3, R4],
    ],
};
